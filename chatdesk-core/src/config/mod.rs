//! chatdesk configuration
//!
//! Loads `chatdesk.toml` and applies environment overrides on top of it.

pub mod constants;
pub mod env;
pub mod loader;

pub use env::load_dotenv;
pub use loader::{ChatConfig, ChatdeskConfig, ConfigManager, FilesConfig, ServerConfig};
