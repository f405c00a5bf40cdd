// MCP server: JSON-RPC 2.0 over stdio, one frame per line

use crate::dispatch::Dispatcher;
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tokio_stream::StreamExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{debug, info};

/// MCP protocol revision this server speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// Serve until stdin closes or a termination signal arrives.
    pub async fn run(&self) -> Result<()> {
        let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        let mut stdout = tokio::io::stdout();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Termination signal received, shutting down");
                    break;
                }
                line = lines.next() => {
                    match line {
                        None => {
                            info!("stdin closed, shutting down");
                            break;
                        }
                        Some(Ok(line)) => {
                            if line.trim().is_empty() {
                                continue;
                            }
                            if let Some(response) = self.handle_line(&line).await {
                                let frame = serde_json::to_string(&response)?;
                                stdout.write_all(frame.as_bytes()).await?;
                                stdout.write_all(b"\n").await?;
                                stdout.flush().await?;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one inbound frame. Notifications produce no response.
    async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(_) => {
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "Ignoring notification");
            return None;
        };

        Some(self.handle_request(id, &request.method, request.params).await)
    }

    async fn handle_request(
        &self,
        id: serde_json::Value,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        match method {
            "initialize" => {
                if let Some(params) =
                    params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
                {
                    debug!(
                        client = %params.client_info.name,
                        version = %params.client_info.version,
                        "Client connected"
                    );
                }
                JsonRpcResponse::success(id, self.initialize_result())
            }
            "tools/list" => JsonRpcResponse::success(id, self.dispatcher.list_tools()),
            "tools/call" => {
                let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
                    Ok(Some(params)) => params,
                    Ok(None) | Err(_) => {
                        return JsonRpcResponse::error(
                            id,
                            JsonRpcError::invalid_params("Expected {name, arguments}"),
                        );
                    }
                };

                let result = self.dispatcher.dispatch(&params.name, params.arguments).await;
                JsonRpcResponse::success(id, result)
            }
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{forms_registry, stub::StubForms};
    use serde_json::json;
    use std::sync::Arc;

    fn server() -> McpServer {
        McpServer::new(forms_registry(Arc::new(StubForms::default())))
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = server()
            .handle_line(
                &json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "method": "initialize",
                    "params": {
                        "protocolVersion": "2024-11-05",
                        "capabilities": {},
                        "clientInfo": {"name": "test-client", "version": "0.1.0"}
                    }
                })
                .to_string(),
            )
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "formbridge-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let response = server()
            .handle_line(r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#)
            .await;

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let response = server().handle_line("{not json").await.unwrap();

        assert_eq!(response.error.unwrap().code, -32700);
        assert!(response.id.is_null());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = server()
            .handle_line(r#"{"jsonrpc": "2.0", "id": 7, "method": "resources/list"}"#)
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert!(error.message.contains("resources/list"));
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = server()
            .handle_line(r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#)
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["tools"].as_array().unwrap().len(), 5);
        assert_eq!(result["tools"][0]["name"], "create_form");
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let response = server()
            .handle_line(r#"{"jsonrpc": "2.0", "id": 3, "method": "tools/call"}"#)
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_error_envelope() {
        let response = server()
            .handle_line(
                &json!({
                    "jsonrpc": "2.0",
                    "id": 4,
                    "method": "tools/call",
                    "params": {"name": "delete_form", "arguments": {}}
                })
                .to_string(),
            )
            .await
            .unwrap();

        // Envelope, not a JSON-RPC error: the dispatch invariant
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Unknown tool: delete_form"));
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let response = server()
            .handle_line(
                &json!({
                    "jsonrpc": "2.0",
                    "id": 5,
                    "method": "tools/call",
                    "params": {"name": "create_form", "arguments": {"title": "Survey"}}
                })
                .to_string(),
            )
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert!(result.get("isError").is_none());
        let text = result["content"][0]["text"].as_str().unwrap();
        let body: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["formId"], "abc123");
    }

    #[tokio::test]
    async fn test_serving_continues_after_failures() {
        let server = McpServer::new(forms_registry(Arc::new(StubForms::failing("down"))));

        let first = server
            .handle_line(
                &json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "method": "tools/call",
                    "params": {"name": "get_form", "arguments": {"formId": "f1"}}
                })
                .to_string(),
            )
            .await
            .unwrap();
        let second = server
            .handle_line(r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#)
            .await
            .unwrap();

        assert_eq!(first.result.unwrap()["isError"], true);
        assert_eq!(second.result.unwrap()["tools"].as_array().unwrap().len(), 5);
    }
}
