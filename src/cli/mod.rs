//! Command-line interface module
//!
//! Argument parsing plus one handler per subcommand.

pub mod args;
pub mod ask;
pub mod chat;
pub mod config;
pub mod files;
pub mod health;

pub use args::*;

use anyhow::{Context, Result};
use chatdesk_core::config::load_dotenv;
use chatdesk_core::{ChatdeskConfig, ConfigManager, Variant};

/// Resolve the configuration every command runs with.
///
/// Precedence, lowest first: defaults, chatdesk.toml, `.env` and process
/// environment, then command-line flags.
pub fn load_effective_config(cli: &Cli) -> Result<ChatdeskConfig> {
    load_dotenv()?;

    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => {
            let workspace = match &cli.workspace {
                Some(path) => path.clone(),
                None => std::env::current_dir().context("cannot determine current dir")?,
            };
            ConfigManager::load_from_workspace(&workspace).context("Failed to load configuration")?
        }
    };
    if let Some(path) = manager.config_path() {
        tracing::info!(path = %path.display(), "using configuration file");
    }

    let mut config = manager.into_config();
    config.apply_env_overrides();
    if let Some(base_url) = &cli.base_url {
        config.server.base_url = base_url.clone();
    }
    Ok(config)
}

/// Apply a per-command variant override
pub fn with_variant(mut config: ChatdeskConfig, variant: Option<Variant>) -> ChatdeskConfig {
    if let Some(variant) = variant {
        config.chat.variant = variant;
    }
    config
}
