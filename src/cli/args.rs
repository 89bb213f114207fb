//! CLI argument parsing and configuration

use chatdesk_core::{Domain, Variant};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for chatdesk
#[derive(Parser, Debug)]
#[command(
    name = "chatdesk",
    version,
    about = "Terminal client for the HR/Legal/L1/L2 and persona assistant backends"
)]
pub struct Cli {
    /// Backend base URL; overrides chatdesk.toml and CHATDESK_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file path; skips the workspace/home search
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root used to find chatdesk.toml; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive conversation with the assistant
    Chat {
        /// Domain to start in (auto, hr, legal, l1, l2)
        #[arg(long)]
        domain: Option<Domain>,

        /// Backend wire variant (domain, persona)
        #[arg(long)]
        variant: Option<Variant>,
    },

    /// Single question; prints the assistant's reply
    Ask {
        /// Domain to route the question to
        #[arg(long)]
        domain: Option<Domain>,

        /// Backend wire variant (domain, persona)
        #[arg(long)]
        variant: Option<Variant>,

        /// The question to send
        prompt: Vec<String>,
    },

    /// List or upload attachments
    Files {
        #[command(subcommand)]
        action: FilesAction,
    },

    /// Check whether the backend is up
    Health,

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum FilesAction {
    /// Show the remote listing
    List,

    /// Upload a file, then show the refreshed listing
    Upload {
        /// File to upload
        path: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Chat {
            domain: None,
            variant: None,
        }
    }
}
