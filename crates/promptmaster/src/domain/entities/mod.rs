//! Domain Entities
//!
//! - Template: static prompting-strategy catalog
//! - PromptRecord: one prompt/response exchange in the history
//! - UploadAcknowledgement: receipt for an uploaded context document

mod prompt_record;
mod template;
mod upload;

pub use prompt_record::*;
pub use template::*;
pub use upload::*;
