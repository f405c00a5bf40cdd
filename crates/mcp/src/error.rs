// Error kinds for tool dispatch

use crate::tools::ValidationError;
use formbridge_forms::FormsError;

/// Everything that can go wrong between receiving a tool call and producing
/// its envelope. The dispatcher matches on the kind, never on message text.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Requested tool name is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed validation against the tool's descriptor.
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: ValidationError,
    },

    /// The upstream Forms call failed. Carries the operation being attempted
    /// and the upstream's own message.
    #[error("Failed to {operation}: {message}")]
    Upstream { operation: String, message: String },

    /// Unexpected fault inside a handler.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Wrap an upstream failure with the operation it interrupted.
    pub fn upstream(operation: impl Into<String>, err: FormsError) -> Self {
        Self::Upstream {
            operation: operation.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
