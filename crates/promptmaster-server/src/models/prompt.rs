//! Prompt DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Process-prompt request body.
///
/// Every field defaults to the empty string; nothing is validated before
/// substitution.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessPromptRequest {
    pub prompt: String,
    pub prompt_type: String,
    pub format: String,
    pub examples: String,
    pub role: String,
    /// Placeholder context string from an uploaded document, prepended to
    /// the composed prompt upstream.
    pub context: String,
}

/// Successful process-prompt response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPromptResponse {
    pub success: bool,
    pub response: String,
    pub prompt_id: String,
}

/// Envelope for process-prompt failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Plain error body for lookup and upload failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub error: String,
}
