//! Prompt Composition
//!
//! Fills the per-strategy pattern with the user's role/examples/task text.

use crate::domain::value_objects::PromptStrategy;

/// Compose the instruction sent upstream.
///
/// Fields are substituted verbatim, empty strings included; an unknown
/// strategy tag yields the task text unchanged.
pub fn compose(strategy_tag: &str, role: &str, task: &str, examples: &str, format: &str) -> String {
    match PromptStrategy::parse(strategy_tag) {
        Some(PromptStrategy::ZeroShot) => {
            format!("You are {role}. {task} Always respond in {format} format.")
        }
        Some(PromptStrategy::OneShot) => {
            format!("Example:\n{examples}\n\nNow perform this task: {task}")
        }
        Some(PromptStrategy::MultiShot) => {
            format!("Examples:\n{examples}\n\nNow perform this task: {task}")
        }
        Some(PromptStrategy::ChainOfThought) => {
            format!("Think step by step and then provide your final answer: {task}")
        }
        None => task.to_string(),
    }
}
