use async_trait::async_trait;

use crate::error::Result;

/// Outbound seam to the completion API.
///
/// One operation: send a prompt, get the first choice's text back. Handlers
/// hold this as a trait object so tests can substitute a scripted stub.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}
