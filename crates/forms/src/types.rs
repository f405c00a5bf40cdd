//! Request and response models for the Google Forms v1 API.
//!
//! Only the slice of the document schema the adapter actually writes is
//! typed; reads are passed through as raw JSON.

use serde::{Deserialize, Serialize};

/// Title metadata for a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInfo {
    pub title: String,
    /// Document title shown in Drive; mirrors `title` on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a new form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewForm {
    pub info: FormInfo,
}

/// A created or fetched form. Fields the adapter does not use are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub form_id: String,
    pub info: FormInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_uri: Option<String>,
}

/// A single operation inside a batch update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateRequest {
    CreateItem(CreateItemRequest),
}

/// Insert one item into a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item: Item,
    pub location: Location,
}

/// Position of an item within the form's item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub index: u32,
}

/// A form item. The adapter only ever creates question items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub question_item: QuestionItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: Question,
}

/// A question with exactly one kind set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_question: Option<TextQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_question: Option<ChoiceQuestion>,
}

impl Question {
    /// A short-answer text question.
    pub fn text(required: bool) -> Self {
        Self {
            required,
            text_question: Some(TextQuestion { paragraph: false }),
            choice_question: None,
        }
    }

    /// A single-select multiple choice question; options keep caller order.
    pub fn single_select(options: Vec<String>, required: bool) -> Self {
        Self {
            required,
            text_question: None,
            choice_question: Some(ChoiceQuestion {
                r#type: ChoiceType::Radio,
                options: options.into_iter().map(|value| ChoiceOption { value }).collect(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQuestion {
    pub paragraph: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub r#type: ChoiceType,
    pub options: Vec<ChoiceOption>,
}

/// How a choice question is rendered and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceType {
    /// Exactly one selectable option.
    #[serde(rename = "RADIO")]
    Radio,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "DROP_DOWN")]
    DropDown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
}

/// Body for `POST /v1/forms/{id}:batchUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<UpdateRequest>,
}

/// Response from a batch update. Replies are opaque to the adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_form_serializes_camel_case() {
        let form = NewForm {
            info: FormInfo {
                title: "Survey".to_string(),
                document_title: Some("Survey".to_string()),
                description: None,
            },
        };

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            json!({"info": {"title": "Survey", "documentTitle": "Survey"}})
        );
    }

    #[test]
    fn test_create_item_wire_shape() {
        let request = UpdateRequest::CreateItem(CreateItemRequest {
            item: Item {
                title: "Pick one".to_string(),
                question_item: QuestionItem {
                    question: Question::single_select(
                        vec!["A".to_string(), "B".to_string()],
                        false,
                    ),
                },
            },
            location: Location { index: 0 },
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "createItem": {
                    "item": {
                        "title": "Pick one",
                        "questionItem": {
                            "question": {
                                "required": false,
                                "choiceQuestion": {
                                    "type": "RADIO",
                                    "options": [{"value": "A"}, {"value": "B"}]
                                }
                            }
                        }
                    },
                    "location": {"index": 0}
                }
            })
        );
    }

    #[test]
    fn test_text_question_wire_shape() {
        let question = Question::text(true);

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(
            value,
            json!({"required": true, "textQuestion": {"paragraph": false}})
        );
    }

    #[test]
    fn test_form_deserializes_with_extra_fields() {
        let body = json!({
            "formId": "abc123",
            "info": {"title": "Survey", "documentTitle": "Survey"},
            "revisionId": "00000003",
            "responderUri": "https://docs.google.com/forms/d/e/xyz/viewform"
        });

        let form: Form = serde_json::from_value(body).unwrap();
        assert_eq!(form.form_id, "abc123");
        assert_eq!(form.info.title, "Survey");
        assert!(form.responder_uri.is_some());
    }
}
