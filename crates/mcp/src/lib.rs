// MCP (Model Context Protocol) server for Google Forms
// Exposes form creation and read tools to agent clients over stdio

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use dispatch::Dispatcher;
pub use error::ToolError;
pub use server::McpServer;
