// Form-level tools: create and read

use crate::error::ToolError;
use crate::protocol::CallToolResult;
use crate::tools::{FieldKind, FieldSpec, Tool, ToolDescriptor};
use formbridge_forms::{FormInfo, FormsService, NewForm};
use serde::Deserialize;
use std::sync::Arc;

/// Public viewer URL for a form.
fn viewer_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{}/viewform", form_id)
}

/// Tool to create a new form
pub struct CreateFormTool {
    forms: Arc<dyn FormsService>,
}

impl CreateFormTool {
    pub fn new(forms: Arc<dyn FormsService>) -> Self {
        Self { forms }
    }
}

#[derive(Debug, Deserialize)]
struct CreateFormArgs {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreateFormTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "create_form",
            "Create a new Google Form with a title and optional description",
            vec![
                FieldSpec::required("title", FieldKind::String, "The title of the form"),
                FieldSpec::optional(
                    "description",
                    FieldKind::String,
                    "An optional description for the form",
                ),
            ],
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: CreateFormArgs = serde_json::from_value(arguments)?;
        let description = args.description.clone().unwrap_or_default();

        let form = self
            .forms
            .create_form(NewForm {
                info: FormInfo {
                    title: args.title.clone(),
                    // Drive document title mirrors the form title
                    document_title: Some(args.title.clone()),
                    description: args.description,
                },
            })
            .await
            .map_err(|e| ToolError::upstream("create form", e))?;

        let body = serde_json::json!({
            "formId": form.form_id,
            "title": args.title,
            "description": description,
            "responderUri": viewer_url(&form.form_id),
        });
        Ok(CallToolResult::text(serde_json::to_string_pretty(&body)?))
    }
}

/// Tool to fetch a form's full document representation
pub struct GetFormTool {
    forms: Arc<dyn FormsService>,
}

impl GetFormTool {
    pub fn new(forms: Arc<dyn FormsService>) -> Self {
        Self { forms }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetFormArgs {
    form_id: String,
}

#[async_trait::async_trait]
impl Tool for GetFormTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "get_form",
            "Get a form's full details by ID",
            vec![FieldSpec::required(
                "formId",
                FieldKind::String,
                "The ID of the form",
            )],
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: GetFormArgs = serde_json::from_value(arguments)?;

        let form = self
            .forms
            .get_form(&args.form_id)
            .await
            .map_err(|e| ToolError::upstream("get form", e))?;

        Ok(CallToolResult::text(serde_json::to_string_pretty(&form)?))
    }
}

/// Tool to list submitted responses for a form
pub struct GetFormResponsesTool {
    forms: Arc<dyn FormsService>,
}

impl GetFormResponsesTool {
    pub fn new(forms: Arc<dyn FormsService>) -> Self {
        Self { forms }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetFormResponsesArgs {
    form_id: String,
}

#[async_trait::async_trait]
impl Tool for GetFormResponsesTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "get_form_responses",
            "List submitted responses for a form",
            vec![FieldSpec::required(
                "formId",
                FieldKind::String,
                "The ID of the form",
            )],
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: GetFormResponsesArgs = serde_json::from_value(arguments)?;

        let responses = self
            .forms
            .list_responses(&args.form_id)
            .await
            .map_err(|e| ToolError::upstream("get form responses", e))?;

        Ok(CallToolResult::text(serde_json::to_string_pretty(
            &responses,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use crate::tools::stub::StubForms;
    use serde_json::json;

    fn envelope_text(result: &CallToolResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[tokio::test]
    async fn test_create_form_envelope_body() {
        let stub = Arc::new(StubForms::default());
        let tool = CreateFormTool::new(stub.clone());

        let result = tool
            .execute(json!({"title": "Survey"}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        let body: serde_json::Value = serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(
            body,
            json!({
                "formId": "abc123",
                "title": "Survey",
                "description": "",
                "responderUri": "https://docs.google.com/forms/d/abc123/viewform"
            })
        );
    }

    #[tokio::test]
    async fn test_create_form_mirrors_document_title() {
        let stub = Arc::new(StubForms::default());
        let tool = CreateFormTool::new(stub.clone());

        tool.execute(json!({"title": "Survey", "description": "About you"}))
            .await
            .unwrap();

        let calls = stub.create_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].info.title, "Survey");
        assert_eq!(calls[0].info.document_title.as_deref(), Some("Survey"));
        assert_eq!(calls[0].info.description.as_deref(), Some("About you"));
    }

    #[tokio::test]
    async fn test_create_form_upstream_failure() {
        let stub = Arc::new(StubForms::failing("quota exceeded"));
        let tool = CreateFormTool::new(stub);

        let err = tool
            .execute(json!({"title": "Survey"}))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Failed to create form"));
        assert!(message.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_get_form_passes_body_through() {
        let stub = Arc::new(StubForms {
            form_body: json!({"formId": "f1", "items": [{"title": "Q1"}]}),
            ..Default::default()
        });
        let tool = GetFormTool::new(stub.clone());

        let result = tool.execute(json!({"formId": "f1"})).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(body, json!({"formId": "f1", "items": [{"title": "Q1"}]}));
        assert_eq!(*stub.get_calls.lock().unwrap(), vec!["f1".to_string()]);
    }

    #[tokio::test]
    async fn test_reads_are_not_cached() {
        let stub = Arc::new(StubForms::default());
        let tool = GetFormResponsesTool::new(stub.clone());

        tool.execute(json!({"formId": "f1"})).await.unwrap();
        tool.execute(json!({"formId": "f1"})).await.unwrap();

        assert_eq!(stub.response_calls.lock().unwrap().len(), 2);
        assert!(stub.update_calls.lock().unwrap().is_empty());
        assert!(stub.create_calls.lock().unwrap().is_empty());
    }
}
