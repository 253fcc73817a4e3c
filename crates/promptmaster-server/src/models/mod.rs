//! PromptMaster API Models
//!
//! Request/response DTOs for the HTTP surface. The entities they wrap
//! (Template, PromptRecord, UploadAcknowledgement) live in the domain crate.

mod prompt;

pub use prompt::*;
