//! In-Memory Prompt History
//!
//! Insertion-ordered, append-only list living for the process lifetime.
//! Created at startup, discarded at shutdown; a restart starts empty.

use async_trait::async_trait;
use tokio::sync::RwLock;

use promptmaster::domain::{errors::DomainError, PromptRecord};
use promptmaster::ports::PromptRepository;

/// In-memory implementation of the prompt history port.
///
/// The lock is never held across an outbound await; append is a single
/// atomic step under the cooperative scheduling model.
#[derive(Default)]
pub struct InMemoryPromptRepository {
    records: RwLock<Vec<PromptRecord>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn append(&self, record: PromptRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PromptRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PromptRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}
