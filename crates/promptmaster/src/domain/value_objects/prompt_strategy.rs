//! PromptStrategy - Named Prompting Technique

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A known prompting strategy.
///
/// Strategy tags arrive from clients as free text; unknown tags are not an
/// error, the composer passes the task through unchanged for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PromptStrategy {
    ZeroShot,
    OneShot,
    MultiShot,
    ChainOfThought,
}

impl PromptStrategy {
    /// Parse a strategy tag. Unknown tags return `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "zero-shot" => Some(Self::ZeroShot),
            "one-shot" => Some(Self::OneShot),
            "multi-shot" => Some(Self::MultiShot),
            "chain-of-thought" => Some(Self::ChainOfThought),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroShot => "zero-shot",
            Self::OneShot => "one-shot",
            Self::MultiShot => "multi-shot",
            Self::ChainOfThought => "chain-of-thought",
        }
    }
}

impl std::fmt::Display for PromptStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
