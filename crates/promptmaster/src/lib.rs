//! PromptMaster Domain Library
//!
//! Core domain types and interfaces for the PromptMaster prompt
//! engineering workbench.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Template, PromptRecord, UploadAcknowledgement)
//!   - `value_objects/`: Immutable value types (PromptStrategy, RenderMode)
//!   - `services/`: Pure domain services (prompt composition, response rendering)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: History storage interfaces
//!   - `services/`: Upstream text-generation interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptmaster::domain::{PromptRecord, Template};
//! use promptmaster::ports::{PromptRepository, TextGenProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AnalyticsSummary, DomainError, GatewayError, PromptRecord, PromptStrategy, RenderMode,
    Template, UploadAcknowledgement,
};
pub use ports::{PromptRepository, TextGenProvider};
