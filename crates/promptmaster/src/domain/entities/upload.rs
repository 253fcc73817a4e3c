//! UploadAcknowledgement - Receipt for an Uploaded Document
//!
//! The uploaded bytes are stored on disk but never parsed; clients only use
//! the original name as a placeholder context string.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Receipt returned after a document upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAcknowledgement {
    pub success: bool,
    /// Disambiguated name on disk (millisecond prefix + original name).
    pub filename: String,
    pub original_name: String,
    pub path: String,
}
