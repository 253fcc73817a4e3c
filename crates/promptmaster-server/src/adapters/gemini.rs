//! Gemini Text-Generation Adapter
//!
//! Discovers a generation model by listing the API's models and filtering
//! by name, then submits the composed instruction via `generateContent`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use promptmaster::domain::errors::GatewayError;
use promptmaster::ports::TextGenProvider;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini generative-language API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

impl GeminiProvider {
    /// Creates a new provider using the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// List the models available to this key.
    async fn list_models(&self) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/models?key={}", BASE_URL, self.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| GatewayError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(GatewayError::Unavailable(format!(
                "{}: {}",
                status,
                extract_api_error(&body)
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GatewayError::Unavailable(err.to_string()))?;

        let models = payload
            .get("models")
            .and_then(|m| m.as_array())
            .cloned()
            .unwrap_or_default();

        Ok(models)
    }

    /// Pick the first generation-capable model by name.
    ///
    /// Model names look like `models/text-bison-001`; embedding families
    /// are excluded by substring. The filter is intentionally kept as a
    /// plain name match.
    fn select_model(models: &[Value]) -> Option<String> {
        models.iter().find_map(|model| {
            let name = model.get("name")?.as_str()?;
            let suitable = (name.contains("bison") || name.contains("text"))
                && !name.contains("embedding")
                && !name.contains("embed");
            suitable.then(|| name.to_string())
        })
    }
}

#[async_trait]
impl TextGenProvider for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, GatewayError> {
        let models = self.list_models().await?;
        let model = Self::select_model(&models).ok_or(GatewayError::NoSuitableModel)?;

        tracing::debug!("Selected upstream model {}", model);

        let text = match context {
            Some(ctx) if !ctx.is_empty() => format!("{}\n\n{}", ctx, prompt),
            _ => prompt.to_string(),
        };

        let url = format!("{}/{}:generateContent?key={}", BASE_URL, model, self.api_key);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| GatewayError::Upstream(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(GatewayError::Upstream(format!(
                "{}: {}",
                status,
                extract_api_error(&body)
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GatewayError::Upstream(err.to_string()))?;

        extract_reply(&payload)
            .ok_or_else(|| GatewayError::Upstream("response had no candidate text".to_string()))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================
// Helper Functions
// ============================================

/// The first candidate's first text part, exactly as received.
fn extract_reply(root: &Value) -> Option<String> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")?
                .get("message")?
                .as_str()
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_text_and_bison_models_only() {
        let models = vec![
            json!({"name": "models/embedding-gecko-001"}),
            json!({"name": "models/text-bison-001"}),
            json!({"name": "models/chat-bison-001"}),
        ];
        assert_eq!(
            GeminiProvider::select_model(&models).as_deref(),
            Some("models/text-bison-001")
        );
    }

    #[test]
    fn excludes_embedding_families() {
        let models = vec![
            json!({"name": "models/text-embedding-004"}),
            json!({"name": "models/embed-text-1"}),
        ];
        assert_eq!(GeminiProvider::select_model(&models), None);
    }

    #[test]
    fn no_models_means_no_selection() {
        assert_eq!(GeminiProvider::select_model(&[]), None);
        let unnamed = vec![json!({"displayName": "Gemini"})];
        assert_eq!(GeminiProvider::select_model(&unnamed), None);
    }

    #[test]
    fn extracts_first_candidate_text() {
        let payload = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        });
        assert_eq!(extract_reply(&payload).as_deref(), Some("first"));
    }

    #[test]
    fn missing_candidates_yield_none() {
        assert_eq!(extract_reply(&json!({})), None);
        assert_eq!(extract_reply(&json!({"candidates": []})), None);
    }

    #[test]
    fn api_error_message_is_extracted() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid"}}"#;
        assert_eq!(extract_api_error(body), "API key not valid");
        assert_eq!(extract_api_error("plain failure"), "plain failure");
    }
}
