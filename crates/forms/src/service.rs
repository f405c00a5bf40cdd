//! The capability surface the MCP adapter depends on.

use crate::error::FormsResult;
use crate::types::{BatchUpdateResponse, Form, NewForm, UpdateRequest};

/// The four Forms operations exposed to tool handlers.
///
/// Handlers hold this as `Arc<dyn FormsService>` so tests can substitute a
/// stub without any network. Reads return the upstream JSON untouched; the
/// adapter's contract for them is verbatim pass-through.
#[async_trait::async_trait]
pub trait FormsService: Send + Sync {
    /// Create a new form.
    async fn create_form(&self, form: NewForm) -> FormsResult<Form>;

    /// Apply a batch of update operations to an existing form.
    async fn batch_update(
        &self,
        form_id: &str,
        requests: Vec<UpdateRequest>,
    ) -> FormsResult<BatchUpdateResponse>;

    /// Fetch the full document representation of a form.
    async fn get_form(&self, form_id: &str) -> FormsResult<serde_json::Value>;

    /// Fetch the submitted responses for a form.
    async fn list_responses(&self, form_id: &str) -> FormsResult<serde_json::Value>;
}
