//! Prompt History Port
//!
//! Abstract interface for the process-lifetime prompt history.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, PromptRecord};

/// Repository interface for prompt history.
///
/// The store is insertion-ordered and append-only; there is no durability
/// guarantee and a restart starts empty.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Append a record to the history.
    async fn append(&self, record: PromptRecord) -> Result<(), DomainError>;

    /// All records, most recent first.
    async fn list_all(&self) -> Result<Vec<PromptRecord>, DomainError>;

    /// Find a record by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<PromptRecord>, DomainError>;
}
