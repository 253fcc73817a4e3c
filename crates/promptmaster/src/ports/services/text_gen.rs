//! Text Generation Port
//!
//! Abstract interface over the upstream generative-text service, so the
//! HTTP layer can be exercised with a stub provider.

use async_trait::async_trait;

use crate::domain::errors::GatewayError;

/// Upstream text-generation interface.
#[async_trait]
pub trait TextGenProvider: Send + Sync {
    /// Submit a composed instruction and return the raw reply text.
    ///
    /// A supplied context string is prepended to the instruction with a
    /// blank-line separator before sending. The reply is returned exactly
    /// as received, with no post-processing or truncation.
    async fn generate(&self, prompt: &str, context: Option<&str>)
        -> Result<String, GatewayError>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &str;
}
