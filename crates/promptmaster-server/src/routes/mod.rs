//! PromptMaster API Routes
//!
//! - /api/templates - prompting strategy catalog
//! - /api/process-prompt - compose, forward upstream, record
//! - /api/prompts - history (most recent first), lookup by id
//! - /api/upload - context document upload

pub mod history;
pub mod process;
pub mod swagger;
pub mod templates;
pub mod upload;
