//! # Formbridge Forms
//!
//! Typed Google Forms API client used by the Formbridge MCP server.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formbridge_forms::{Credentials, FormsClient, FormsResult, FormsService};
//!
//! #[tokio::main]
//! async fn main() -> FormsResult<()> {
//!     let client = FormsClient::builder()
//!         .credentials(Credentials::from_env()?)
//!         .build()?;
//!
//!     let form = client.get_form("1FAIpQLSe...").await?;
//!     println!("{}", form);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod transport;
pub mod types;

// Re-export main client
pub use client::{FormsClient, FormsClientBuilder};
pub use config::{ClientConfig, Credentials};
pub use error::{FormsError, FormsResult};
pub use service::FormsService;

// Re-export auth
pub use auth::{AccessTokenProvider, OauthTokenProvider, StaticTokenProvider};

// Re-export API models
pub use types::{
    BatchUpdateRequest, BatchUpdateResponse, ChoiceOption, ChoiceQuestion, ChoiceType,
    CreateItemRequest, Form, FormInfo, Item, Location, NewForm, Question, QuestionItem,
    TextQuestion, UpdateRequest,
};
