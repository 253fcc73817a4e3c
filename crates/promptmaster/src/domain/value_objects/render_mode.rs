//! RenderMode - Response Display Format

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a response is rendered for display.
///
/// `markdown` keeps the raw source (no HTML conversion is performed), and
/// unknown tags fall back to plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Json,
    Markdown,
    #[default]
    Text,
}

impl RenderMode {
    /// Parse a format tag, falling back to `Text` for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "json" => Self::Json,
            "markdown" => Self::Markdown,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}
