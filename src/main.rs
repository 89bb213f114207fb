//! chatdesk - terminal client for the assistant chat backends

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, load_effective_config, with_variant};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level);
    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = load_effective_config(&args)?;

    match args.command.unwrap_or_default() {
        Commands::Chat { domain, variant } => {
            cli::chat::handle_chat_command(&with_variant(config, variant), domain).await
        }
        Commands::Ask {
            domain,
            variant,
            prompt,
        } => {
            cli::ask::handle_ask_command(&with_variant(config, variant), domain, &prompt.join(" "))
                .await
        }
        Commands::Files { action } => cli::files::handle_files_command(&config, action).await,
        Commands::Health => cli::health::handle_health_command(&config).await,
        Commands::Config => cli::config::handle_config_command(&config),
    }
}
