// Declarative tool input shapes and argument validation

use crate::protocol::ToolSchema;
use serde_json::Value;

/// Primitive type a tool argument may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    /// Flat array of strings.
    StringArray,
}

impl FieldKind {
    /// Check a present JSON value against this kind.
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    /// Human description used in validation messages.
    fn expected(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::StringArray => "an array of strings",
        }
    }

    /// JSON-schema fragment for this kind.
    fn schema(self, description: &str) -> Value {
        match self {
            Self::String => serde_json::json!({
                "type": "string",
                "description": description
            }),
            Self::Boolean => serde_json::json!({
                "type": "boolean",
                "description": description
            }),
            Self::StringArray => serde_json::json!({
                "type": "array",
                "items": {"type": "string"},
                "description": description
            }),
        }
    }
}

/// One argument in a tool's input shape.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
        }
    }
}

/// Why an argument bag was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
}

/// Declarative description of one tool: its name, human description, and
/// input shape. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl ToolDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            name,
            description,
            fields,
        }
    }

    /// Check an argument bag against this descriptor.
    ///
    /// Fields are walked in declaration order and the first offending field
    /// wins. `null` counts as absent; an empty string or empty array does
    /// not. Fields the descriptor does not declare are ignored.
    pub fn validate(&self, arguments: &Value) -> Result<(), ValidationError> {
        let empty = serde_json::Map::new();
        let map = arguments.as_object().unwrap_or(&empty);

        for field in &self.fields {
            match map.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(ValidationError::MissingField(field.name.to_string()));
                    }
                }
                Some(value) => {
                    if !field.kind.matches(value) {
                        return Err(ValidationError::InvalidType {
                            field: field.name.to_string(),
                            expected: field.kind.expected(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the MCP JSON-schema shape for this tool's input.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            properties.insert(field.name.to_string(), field.kind.schema(field.description));
            if field.required {
                required.push(Value::String(field.name.to_string()));
            }
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }

    /// Render the full MCP tool definition.
    pub fn to_schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema(),
        }
    }
}
