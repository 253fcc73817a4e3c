//! Response Rendering
//!
//! Pure presentation over (response text, render mode), plus the crude
//! usage summary shown in the history sidebar.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::PromptRecord;
use crate::domain::value_objects::RenderMode;

/// Render a response for display.
///
/// `json` is a best-effort pretty-print with 2-space indentation; text that
/// does not parse falls back silently to plain rendering. `markdown` and
/// `text` return the input unchanged.
pub fn render_response(response: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Json => match serde_json::from_str::<serde_json::Value>(response) {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| response.to_string())
            }
            Err(_) => response.to_string(),
        },
        RenderMode::Markdown | RenderMode::Text => response.to_string(),
    }
}

/// Crude usage summary over the prompt history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_prompts: usize,
    pub success_rate: String,
    pub avg_response: String,
}

/// Summarize the history for the analytics panel.
///
/// Success rate and average latency are fixed placeholder figures; only
/// successful exchanges are ever recorded.
pub fn analytics_summary(records: &[PromptRecord]) -> AnalyticsSummary {
    let total = records.len();
    AnalyticsSummary {
        total_prompts: total,
        success_rate: if total > 0 { "100%" } else { "0%" }.to_string(),
        avg_response: if total > 0 { "2.5s" } else { "0s" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PromptRecord {
        PromptRecord {
            id: id.to_string(),
            original_prompt: "task".to_string(),
            processed_prompt: "processed".to_string(),
            response: "reply".to_string(),
            timestamp: chrono::Utc::now(),
            prompt_type: "zero-shot".to_string(),
            format: "text".to_string(),
        }
    }

    #[test]
    fn json_mode_pretty_prints_with_two_spaces() {
        let out = render_response(r#"{"a":1}"#, RenderMode::Json);
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn json_mode_falls_back_to_text_on_parse_failure() {
        assert_eq!(render_response("hello", RenderMode::Json), "hello");
    }

    #[test]
    fn markdown_and_text_pass_through() {
        assert_eq!(render_response("# title", RenderMode::Markdown), "# title");
        assert_eq!(render_response("plain", RenderMode::Text), "plain");
    }

    #[test]
    fn analytics_over_empty_history() {
        let summary = analytics_summary(&[]);
        assert_eq!(summary.total_prompts, 0);
        assert_eq!(summary.success_rate, "0%");
        assert_eq!(summary.avg_response, "0s");
    }

    #[test]
    fn analytics_over_nonempty_history() {
        let records = vec![record("1"), record("2")];
        let summary = analytics_summary(&records);
        assert_eq!(summary.total_prompts, 2);
        assert_eq!(summary.success_rate, "100%");
        assert_eq!(summary.avg_response, "2.5s");
    }
}
