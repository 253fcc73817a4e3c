//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the history repository and the upstream provider.

mod prompt_service;

pub use prompt_service::{ProcessError, ProcessPromptInput, PromptService};
