//! PromptMaster CLI - templates, prompt processing, and history browsing
//!
//! Thin client over the PromptMaster HTTP API.

mod api;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use promptmaster::domain::services::render::{analytics_summary, render_response};
use promptmaster::domain::RenderMode;

use api::{ProcessPromptRequest, PromptMasterClient};
use config::Config;

#[derive(Parser)]
#[command(name = "promptmaster")]
#[command(about = "PromptMaster CLI - prompt engineering workbench", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the prompting strategy templates
    Templates,

    /// Send a prompt through a strategy
    Send {
        /// The task text
        prompt: String,
        /// Strategy: zero-shot, one-shot, multi-shot, chain-of-thought
        #[arg(short, long, default_value = "zero-shot")]
        strategy: String,
        /// Role given to the model (zero-shot)
        #[arg(short, long, default_value = "Helpful AI Assistant")]
        role: String,
        /// Output format: text, json, markdown
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Example block (one-shot, multi-shot)
        #[arg(short, long, default_value = "")]
        examples: String,
        /// Context string prepended to the composed prompt upstream
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Show recent prompt history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Show one recorded prompt in full
    Show {
        /// Prompt record id
        id: String,
    },

    /// Usage summary over the history
    Stats,

    /// Upload a context document
    Upload {
        /// File to upload
        file: PathBuf,
    },

    /// Show or set the server base URL
    Config {
        /// New base URL to save
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = PromptMasterClient::new(&config.base_url);

    match cli.command {
        Commands::Templates => {
            for template in client.templates().await? {
                println!("{} - {}", template.id.bold(), template.description);
                println!("  {}", template.template.dimmed());
            }
        }

        Commands::Send {
            prompt,
            strategy,
            role,
            format,
            examples,
            context,
        } => {
            let request = ProcessPromptRequest {
                prompt,
                prompt_type: strategy,
                format: format.clone(),
                examples,
                role,
                context: context.unwrap_or_default(),
            };
            let response = client.process_prompt(&request).await?;

            println!(
                "{}",
                render_response(&response.response, RenderMode::from_tag(&format))
            );
            eprintln!(
                "{}",
                format!("Recorded as prompt {}", response.prompt_id).dimmed()
            );
        }

        Commands::History { limit } => {
            let records = client.prompts().await?;
            if records.is_empty() {
                println!("No prompts recorded yet.");
            }
            for record in records.into_iter().take(limit) {
                println!(
                    "{}  {}  {}",
                    record.id.bold(),
                    record.prompt_type.cyan(),
                    truncate(&record.original_prompt, 50)
                );
            }
        }

        Commands::Show { id } => {
            let record = client.prompt(&id).await?;
            println!("{}", record.processed_prompt.dimmed());
            println!();
            println!(
                "{}",
                render_response(&record.response, RenderMode::from_tag(&record.format))
            );
        }

        Commands::Stats => {
            let records = client.prompts().await?;
            let summary = analytics_summary(&records);
            println!("Total prompts: {}", summary.total_prompts.to_string().bold());
            println!("Success rate:  {}", summary.success_rate.green());
            println!("Avg response:  {}", summary.avg_response);
        }

        Commands::Upload { file } => {
            let ack = client.upload(&file).await?;
            println!("Uploaded {} -> {}", ack.original_name.bold(), ack.path);
            println!(
                "Use as context: {}",
                format!("Context from document: {}", ack.original_name).dimmed()
            );
        }

        Commands::Config { base_url } => {
            if let Some(base_url) = base_url {
                let mut config = config;
                config.base_url = base_url;
                config.save()?;
                println!("Configuration saved to {:?}", Config::config_path()?);
            } else {
                println!("base_url = {}", config.base_url);
            }
        }
    }

    Ok(())
}

/// Shorten a history preview line, keeping it single-width.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn truncate_shortens_long_text() {
        let long = "x".repeat(60);
        let out = truncate(&long, 50);
        assert_eq!(out.chars().count(), 50);
        assert!(out.ends_with("..."));
    }
}
