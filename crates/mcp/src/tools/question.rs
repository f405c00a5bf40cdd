// Question tools: add text and multiple choice questions to a form

use crate::error::ToolError;
use crate::protocol::CallToolResult;
use crate::tools::{FieldKind, FieldSpec, Tool, ToolDescriptor};
use formbridge_forms::{
    CreateItemRequest, FormsService, Item, Location, Question, QuestionItem, UpdateRequest,
};
use serde::Deserialize;
use std::sync::Arc;

// Every new question lands at the top of the form, so repeated adds read in
// reverse-chronological order. Compatibility behavior, kept as-is.
const INSERT_INDEX: u32 = 0;

fn create_item(title: String, question: Question) -> UpdateRequest {
    UpdateRequest::CreateItem(CreateItemRequest {
        item: Item {
            title,
            question_item: QuestionItem { question },
        },
        location: Location {
            index: INSERT_INDEX,
        },
    })
}

/// Tool to add a text question to an existing form
pub struct AddTextQuestionTool {
    forms: Arc<dyn FormsService>,
}

impl AddTextQuestionTool {
    pub fn new(forms: Arc<dyn FormsService>) -> Self {
        Self { forms }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTextQuestionArgs {
    form_id: String,
    question_title: String,
    #[serde(default)]
    required: Option<bool>,
}

#[async_trait::async_trait]
impl Tool for AddTextQuestionTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "add_text_question",
            "Add a text question to an existing form",
            vec![
                FieldSpec::required("formId", FieldKind::String, "The ID of the form"),
                FieldSpec::required("questionTitle", FieldKind::String, "The question text"),
                FieldSpec::optional(
                    "required",
                    FieldKind::Boolean,
                    "Whether an answer is required (default: false)",
                ),
            ],
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: AddTextQuestionArgs = serde_json::from_value(arguments)?;
        let required = args.required.unwrap_or(false);

        self.forms
            .batch_update(
                &args.form_id,
                vec![create_item(
                    args.question_title.clone(),
                    Question::text(required),
                )],
            )
            .await
            .map_err(|e| ToolError::upstream("add text question", e))?;

        let body = serde_json::json!({
            "formId": args.form_id,
            "questionTitle": args.question_title,
            "required": required,
        });
        Ok(CallToolResult::text(serde_json::to_string_pretty(&body)?))
    }
}

/// Tool to add a single-select multiple choice question
pub struct AddMultipleChoiceQuestionTool {
    forms: Arc<dyn FormsService>,
}

impl AddMultipleChoiceQuestionTool {
    pub fn new(forms: Arc<dyn FormsService>) -> Self {
        Self { forms }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMultipleChoiceQuestionArgs {
    form_id: String,
    question_title: String,
    options: Vec<String>,
    #[serde(default)]
    required: Option<bool>,
}

#[async_trait::async_trait]
impl Tool for AddMultipleChoiceQuestionTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "add_multiple_choice_question",
            "Add a multiple choice question to an existing form",
            vec![
                FieldSpec::required("formId", FieldKind::String, "The ID of the form"),
                FieldSpec::required("questionTitle", FieldKind::String, "The question text"),
                FieldSpec::required(
                    "options",
                    FieldKind::StringArray,
                    "The choice options, in display order",
                ),
                FieldSpec::optional(
                    "required",
                    FieldKind::Boolean,
                    "Whether an answer is required (default: false)",
                ),
            ],
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: AddMultipleChoiceQuestionArgs = serde_json::from_value(arguments)?;
        let required = args.required.unwrap_or(false);

        // Options pass through untouched: order kept, duplicates and empty
        // strings included
        self.forms
            .batch_update(
                &args.form_id,
                vec![create_item(
                    args.question_title.clone(),
                    Question::single_select(args.options.clone(), required),
                )],
            )
            .await
            .map_err(|e| ToolError::upstream("add multiple choice question", e))?;

        let body = serde_json::json!({
            "formId": args.form_id,
            "questionTitle": args.question_title,
            "options": args.options,
            "required": required,
        });
        Ok(CallToolResult::text(serde_json::to_string_pretty(&body)?))
    }
}
