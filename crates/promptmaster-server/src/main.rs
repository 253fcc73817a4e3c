//! PromptMaster API Server binary.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use promptmaster_server::adapters::{GeminiProvider, InMemoryPromptRepository};
use promptmaster_server::application::PromptService;
use promptmaster_server::config::Config;
use promptmaster_server::{app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    tracing::info!("PromptMaster API initializing...");

    // Uploads land in a fixed local directory, created on startup if absent.
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let repository = Arc::new(InMemoryPromptRepository::new());
    let provider = Arc::new(GeminiProvider::new(config.gemini_api_key.clone()));
    let prompt_service = Arc::new(PromptService::new(repository, provider));

    let state = AppState {
        prompt_service,
        upload_dir: config.upload_dir.clone().into(),
    };

    let router = app_router(state, Path::new(&config.public_dir));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!(
        "PromptMaster server running on port {} - visit http://localhost:{}",
        config.port,
        config.port
    );

    axum::serve(listener, router).await?;

    Ok(())
}
