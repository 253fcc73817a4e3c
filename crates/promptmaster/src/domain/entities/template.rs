//! Template - Prompting Strategy Catalog
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A prompting strategy template.
///
/// The catalog is fixed at compile time and read-only at run time; the
/// `template` string documents the substitution pattern for the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: String,
}

impl Template {
    fn new(id: &str, name: &str, description: &str, template: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            template: template.to_string(),
        }
    }

    /// The built-in strategy catalog, in display order.
    pub fn catalog() -> Vec<Template> {
        vec![
            Template::new(
                "zero-shot",
                "Zero-Shot Prompting",
                "Give instructions without examples",
                "You are {{role}}. {{task}} Always respond in {{format}} format.",
            ),
            Template::new(
                "one-shot",
                "One-Shot Prompting",
                "Provide one example before the task",
                "Example:\n{{example}}\n\nNow perform this task: {{task}}",
            ),
            Template::new(
                "multi-shot",
                "Multi-Shot Prompting",
                "Provide multiple examples before the task",
                "Examples:\n{{examples}}\n\nNow perform this task: {{task}}",
            ),
            Template::new(
                "chain-of-thought",
                "Chain-of-Thought Prompting",
                "Encourage step-by-step reasoning",
                "Think step by step and then provide your final answer: {{task}}",
            ),
        ]
    }
}
