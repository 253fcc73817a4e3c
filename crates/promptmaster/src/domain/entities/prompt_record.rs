//! PromptRecord - One Prompt/Response Exchange
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recorded prompt exchange.
///
/// Created on every successful upstream call; never mutated, never deleted,
/// lives only for the process lifetime. The id is a millisecond-timestamp
/// token: unique within a process lifetime, not across restarts, and never
/// validated for collision.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: String,
    pub original_prompt: String,
    pub processed_prompt: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub prompt_type: String,
    pub format: String,
}

impl PromptRecord {
    /// Mint a record for a completed exchange.
    pub fn new(
        original_prompt: String,
        processed_prompt: String,
        response: String,
        prompt_type: String,
        format: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            original_prompt,
            processed_prompt,
            response,
            timestamp: now,
            prompt_type,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_a_nonempty_time_token() {
        let record = PromptRecord::new(
            "task".to_string(),
            "processed".to_string(),
            "reply".to_string(),
            "zero-shot".to_string(),
            "text".to_string(),
        );
        assert!(!record.id.is_empty());
        assert!(record.id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(record.id, record.timestamp.timestamp_millis().to_string());
    }
}
