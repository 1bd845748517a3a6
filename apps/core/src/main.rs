// MatchAI Backend Entry Point
// Profile in, keywords and a ready-to-send suggestion out.

mod config;
mod engine;
mod error;
mod profile;
mod remote;
mod source;

#[cfg(test)]
mod tests;

use std::io::Read;

use anyhow::Context;
use tracing::info;
use validator::Validate;

use config::{BackendKind, RemoteConfig};
use engine::LocalTemplateEngine;
use profile::ProfileInput;
use remote::RemoteModelAdapter;
use source::SuggestionSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read profile from stdin")?;

    let profile: ProfileInput =
        serde_json::from_str(&input).context("profile is not valid JSON")?;
    profile.validate().context("profile failed validation")?;

    let response = match BackendKind::from_env()? {
        BackendKind::Local => {
            info!("running local analysis");
            let report = LocalTemplateEngine::new().analyze(&profile);
            serde_json::to_value(&report)?
        }
        BackendKind::Remote => {
            info!("requesting remote suggestion");
            let adapter = RemoteModelAdapter::new(RemoteConfig::from_env()?)?;
            let suggestion = adapter.request_suggestion(&profile).await;
            serde_json::to_value(&suggestion)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
