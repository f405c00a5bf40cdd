// Standalone MCP server binary

use anyhow::Result;
use formbridge_forms::{Credentials, FormsClient, FormsService};
use formbridge_mcp::server::McpServer;
use formbridge_mcp::tools::forms_registry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only protocol frames
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Formbridge MCP server starting...");

    // Missing credentials are fatal: never start serving without them
    let credentials = Credentials::from_env()?;
    let client: Arc<dyn FormsService> =
        Arc::new(FormsClient::builder().credentials(credentials).build()?);

    let registry = forms_registry(client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.run().await?;

    Ok(())
}
