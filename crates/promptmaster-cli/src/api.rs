//! PromptMaster API Client

use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptmaster::domain::{PromptRecord, Template, UploadAcknowledgement};

/// API Client for PromptMaster
pub struct PromptMasterClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPromptRequest {
    pub prompt: String,
    pub prompt_type: String,
    pub format: String,
    pub examples: String,
    pub role: String,
    pub context: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPromptResponse {
    pub success: bool,
    pub response: String,
    pub prompt_id: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

impl PromptMasterClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List the prompting strategy templates
    pub async fn templates(&self) -> Result<Vec<Template>> {
        let url = format!("{}/api/templates", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to PromptMaster API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        Ok(resp.json().await?)
    }

    /// Process a prompt through the selected strategy
    pub async fn process_prompt(
        &self,
        request: &ProcessPromptRequest,
    ) -> Result<ProcessPromptResponse> {
        let url = format!("{}/api/process-prompt", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to PromptMaster API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            if let Ok(err) = resp.json::<ApiError>().await {
                bail!("{}", err.error);
            }
            bail!("API error ({})", status);
        }

        Ok(resp.json().await?)
    }

    /// Fetch the prompt history, most recent first
    pub async fn prompts(&self) -> Result<Vec<PromptRecord>> {
        let url = format!("{}/api/prompts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to PromptMaster API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        Ok(resp.json().await?)
    }

    /// Fetch one recorded prompt by id
    pub async fn prompt(&self, id: &str) -> Result<PromptRecord> {
        let url = format!("{}/api/prompts/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to PromptMaster API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            if let Ok(err) = resp.json::<ApiError>().await {
                bail!("{}", err.error);
            }
            bail!("API error ({})", status);
        }

        Ok(resp.json().await?)
    }

    /// Upload a context document
    pub async fn upload(&self, path: &Path) -> Result<UploadAcknowledgement> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .context("Upload path has no file name")?;
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/api/upload", self.base_url);
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to PromptMaster API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            if let Ok(err) = resp.json::<ApiError>().await {
                bail!("{}", err.error);
            }
            bail!("API error ({})", status);
        }

        Ok(resp.json().await?)
    }
}
