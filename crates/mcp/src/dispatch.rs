// Tool dispatch: every invocation becomes exactly one envelope

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ListToolsResult};
use crate::tools::ToolRegistry;
use tracing::warn;

/// Resolves tool calls against the registry, drives validation, and turns
/// every outcome into a well-formed envelope.
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// List the tool catalog. Always succeeds.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.schemas(),
        }
    }

    /// Invoke a tool by name.
    ///
    /// Unknown tools, invalid arguments, upstream failures, and unexpected
    /// faults all come back as error envelopes; nothing propagates to the
    /// serving loop. Validation runs before the handler, so a rejected call
    /// never touches the upstream.
    pub async fn dispatch(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        match self.try_dispatch(name, arguments).await {
            Ok(result) => result,
            Err(err) => {
                warn!(tool = name, error = %err, "Tool invocation failed");
                CallToolResult::error(err.to_string())
            }
        }
    }

    async fn try_dispatch(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tool.descriptor()
            .validate(&arguments)
            .map_err(|source| ToolError::InvalidArguments {
                tool: name.to_string(),
                source,
            })?;

        tool.execute(arguments).await
    }
}
