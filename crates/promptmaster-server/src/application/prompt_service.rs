//! Prompt Application Service (Use Case)
//!
//! Composes the instruction, forwards it upstream, and records the
//! exchange in the history.

use std::sync::Arc;

use thiserror::Error;

use promptmaster::domain::services::composer;
use promptmaster::domain::{DomainError, GatewayError, PromptRecord};
use promptmaster::ports::{PromptRepository, TextGenProvider};

/// Inputs for one prompt exchange.
///
/// Missing fields arrive as empty strings and substitute verbatim.
#[derive(Debug, Clone, Default)]
pub struct ProcessPromptInput {
    pub prompt: String,
    pub prompt_type: String,
    pub format: String,
    pub examples: String,
    pub role: String,
    pub context: String,
}

/// Errors from the process-prompt use case.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Application service for prompt operations
pub struct PromptService<R: PromptRepository> {
    repo: Arc<R>,
    provider: Arc<dyn TextGenProvider>,
}

impl<R: PromptRepository> PromptService<R> {
    pub fn new(repo: Arc<R>, provider: Arc<dyn TextGenProvider>) -> Self {
        Self { repo, provider }
    }

    /// Run one exchange: compose, forward upstream, record.
    ///
    /// Nothing is appended to history when the upstream call fails.
    pub async fn process(&self, input: ProcessPromptInput) -> Result<PromptRecord, ProcessError> {
        let processed = composer::compose(
            &input.prompt_type,
            &input.role,
            &input.prompt,
            &input.examples,
            &input.format,
        );

        let context = (!input.context.is_empty()).then_some(input.context.as_str());
        let response = self.provider.generate(&processed, context).await?;

        let record = PromptRecord::new(
            input.prompt,
            processed,
            response,
            input.prompt_type,
            input.format,
        );
        self.repo.append(record.clone()).await?;

        tracing::info!(
            "Recorded {} prompt {} via {}",
            record.prompt_type,
            record.id,
            self.provider.provider_name()
        );

        Ok(record)
    }

    /// All recorded exchanges, most recent first.
    pub async fn history(&self) -> Result<Vec<PromptRecord>, DomainError> {
        self.repo.list_all().await
    }

    /// Look up a recorded exchange by id.
    pub async fn get(&self, id: &str) -> Result<PromptRecord, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }
}
