// MCP tool definitions and implementations

pub mod form;
pub mod question;
mod registry;
mod schema;

pub use form::{CreateFormTool, GetFormResponsesTool, GetFormTool};
pub use question::{AddMultipleChoiceQuestionTool, AddTextQuestionTool};
pub use registry::{Tool, ToolRegistry};
pub use schema::{FieldKind, FieldSpec, ToolDescriptor, ValidationError};

use formbridge_forms::FormsService;
use std::sync::Arc;

/// Build the registry holding the full Forms tool catalog.
pub fn forms_registry(forms: Arc<dyn FormsService>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(CreateFormTool::new(forms.clone())));
    registry.register(Arc::new(AddTextQuestionTool::new(forms.clone())));
    registry.register(Arc::new(AddMultipleChoiceQuestionTool::new(forms.clone())));
    registry.register(Arc::new(GetFormTool::new(forms.clone())));
    registry.register(Arc::new(GetFormResponsesTool::new(forms)));

    registry
}

#[cfg(test)]
pub(crate) mod stub {
    use formbridge_forms::{
        BatchUpdateResponse, Form, FormsError, FormsResult, FormsService, NewForm, UpdateRequest,
    };
    use std::sync::Mutex;

    /// Recording stub for the Forms service.
    ///
    /// Call logs double as the proof that validation failures never reach
    /// the upstream.
    pub(crate) struct StubForms {
        pub created_form_id: String,
        pub form_body: serde_json::Value,
        pub responses_body: serde_json::Value,
        pub failure: Option<String>,
        pub create_calls: Mutex<Vec<NewForm>>,
        pub update_calls: Mutex<Vec<(String, Vec<UpdateRequest>)>>,
        pub get_calls: Mutex<Vec<String>>,
        pub response_calls: Mutex<Vec<String>>,
    }

    impl Default for StubForms {
        fn default() -> Self {
            Self {
                created_form_id: "abc123".to_string(),
                form_body: serde_json::json!({"formId": "abc123"}),
                responses_body: serde_json::json!({"responses": []}),
                failure: None,
                create_calls: Mutex::new(Vec::new()),
                update_calls: Mutex::new(Vec::new()),
                get_calls: Mutex::new(Vec::new()),
                response_calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl StubForms {
        /// Stub whose every operation fails with the given upstream message.
        pub(crate) fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Default::default()
            }
        }

        /// Total number of upstream operations attempted.
        pub(crate) fn upstream_calls(&self) -> usize {
            self.create_calls.lock().unwrap().len()
                + self.update_calls.lock().unwrap().len()
                + self.get_calls.lock().unwrap().len()
                + self.response_calls.lock().unwrap().len()
        }

        fn fail_if_configured(&self) -> FormsResult<()> {
            match &self.failure {
                Some(message) => Err(FormsError::Api {
                    status: 500,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait::async_trait]
    impl FormsService for StubForms {
        async fn create_form(&self, form: NewForm) -> FormsResult<Form> {
            self.create_calls.lock().unwrap().push(form.clone());
            self.fail_if_configured()?;
            Ok(Form {
                form_id: self.created_form_id.clone(),
                info: form.info,
                responder_uri: None,
            })
        }

        async fn batch_update(
            &self,
            form_id: &str,
            requests: Vec<UpdateRequest>,
        ) -> FormsResult<BatchUpdateResponse> {
            self.update_calls
                .lock()
                .unwrap()
                .push((form_id.to_string(), requests));
            self.fail_if_configured()?;
            Ok(BatchUpdateResponse::default())
        }

        async fn get_form(&self, form_id: &str) -> FormsResult<serde_json::Value> {
            self.get_calls.lock().unwrap().push(form_id.to_string());
            self.fail_if_configured()?;
            Ok(self.form_body.clone())
        }

        async fn list_responses(&self, form_id: &str) -> FormsResult<serde_json::Value> {
            self.response_calls.lock().unwrap().push(form_id.to_string());
            self.fail_if_configured()?;
            Ok(self.responses_body.clone())
        }
    }
}
