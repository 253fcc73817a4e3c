//! Server Configuration
//!
//! Read from the process environment, with `.env` support for local runs.

use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key (required).
    pub gemini_api_key: String,
    /// HTTP listen port.
    pub port: u16,
    /// Directory where uploaded documents are stored.
    pub upload_dir: String,
    /// Directory the static front end is served from.
    pub public_dir: String,
}

impl Config {
    /// Load configuration, reading a `.env` file first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string());

        Ok(Self {
            gemini_api_key,
            port,
            upload_dir,
            public_dir,
        })
    }
}
