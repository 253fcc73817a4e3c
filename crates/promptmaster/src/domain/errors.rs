//! Domain Errors
//!
//! Error types for domain and gateway operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity: T, id: &str) -> Self {
        Self::NotFound {
            entity: entity.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Upstream text-generation errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The model listing call failed.
    #[error("Failed to list upstream models: {0}")]
    Unavailable(String),

    /// No model name passed the inclusion/exclusion filter.
    #[error("No suitable text generation model found")]
    NoSuitableModel,

    /// The generation call failed or returned an unexpected shape.
    #[error("Upstream generation failed: {0}")]
    Upstream(String),
}
