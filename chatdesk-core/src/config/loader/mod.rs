use crate::chat::{Domain, Variant};
use crate::config::constants::{config_files, defaults, endpoints, env_vars};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend server settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL every endpoint path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_health_path")]
    pub health_path: String,
}

fn default_base_url() -> String {
    endpoints::DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    defaults::TIMEOUT_SECS
}
fn default_health_path() -> String {
    endpoints::HEALTH.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            health_path: default_health_path(),
        }
    }
}

/// Chat exchange settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Wire encoding the backend speaks
    #[serde(default)]
    pub variant: Variant,

    /// Domain selected when a session starts
    #[serde(default)]
    pub default_domain: Domain,

    /// Chat endpoint path; defaults depend on the variant
    #[serde(default)]
    pub chat_path: Option<String>,

    /// Optional key forwarded to the domain backend with each request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ChatConfig {
    pub fn resolved_chat_path(&self) -> &str {
        match &self.chat_path {
            Some(path) => path,
            None => match self.variant {
                Variant::Domain => endpoints::domain::CHAT,
                Variant::Persona => endpoints::persona::CHAT,
            },
        }
    }
}

/// Attachment store settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    #[serde(default = "default_list_path")]
    pub list_path: String,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    /// Upper bound passed to the listing endpoint
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_list_path() -> String {
    endpoints::domain::FILES_LIST.to_string()
}
fn default_upload_path() -> String {
    endpoints::domain::FILES_UPLOAD.to_string()
}
fn default_max_results() -> u32 {
    defaults::MAX_LIST_RESULTS
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            list_path: default_list_path(),
            upload_path: default_upload_path(),
            max_results: default_max_results(),
        }
    }
}

/// Main configuration structure for chatdesk
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatdeskConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub files: FilesConfig,
}

impl ChatdeskConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    /// Join an endpoint path onto the configured base URL
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.server.base_url, path)
    }

    /// Apply `CHATDESK_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(env_vars::BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.server.base_url = base_url;
        }
        if let Some(api_key) = lookup(env_vars::API_KEY).filter(|v| !v.trim().is_empty()) {
            self.chat.api_key = Some(api_key);
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ChatdeskConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let config_path = workspace.join(config_files::FILE_NAME);
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }

        let fallback_path = workspace
            .join(config_files::DIR_NAME)
            .join(config_files::FILE_NAME);
        if fallback_path.exists() {
            return Self::load_from_file(&fallback_path);
        }

        if let Some(home_dir) = Self::get_home_dir() {
            let home_config_path = home_dir
                .join(config_files::DIR_NAME)
                .join(config_files::FILE_NAME);
            if home_config_path.exists() {
                return Self::load_from_file(&home_config_path);
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no config file found, using defaults");
        Ok(Self {
            config: ChatdeskConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ChatdeskConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ChatdeskConfig {
        &self.config
    }

    pub fn into_config(self) -> ChatdeskConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_local_domain_backend() {
        let config = ChatdeskConfig::default();
        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert_eq!(config.chat.variant, Variant::Domain);
        assert_eq!(config.chat.default_domain, Domain::Auto);
        assert_eq!(config.chat.resolved_chat_path(), "/api/chat");
        assert_eq!(config.files.max_results, 100);
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn persona_variant_switches_default_chat_path() {
        let mut config = ChatdeskConfig::default();
        config.chat.variant = Variant::Persona;
        assert_eq!(config.chat.resolved_chat_path(), "/chat");

        config.chat.chat_path = Some("/v2/chat".to_string());
        assert_eq!(config.chat.resolved_chat_path(), "/v2/chat");
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let mut config = ChatdeskConfig::default();
        config.server.base_url = "http://example.test/".to_string();
        assert_eq!(config.endpoint("/api/chat"), "http://example.test/api/chat");
        assert_eq!(config.endpoint("health"), "http://example.test/health");
    }

    #[test]
    fn parses_partial_toml() {
        let config: ChatdeskConfig = toml::from_str(
            r#"
[server]
base_url = "https://chat.internal"

[chat]
variant = "persona"
default_domain = "legal"
"#,
        )
        .unwrap();

        assert_eq!(config.server.base_url, "https://chat.internal");
        assert_eq!(config.server.timeout_secs, 60);
        assert_eq!(config.chat.variant, Variant::Persona);
        assert_eq!(config.chat.default_domain, Domain::Legal);
        assert_eq!(config.files.upload_path, "/api/files/upload");
    }

    #[test]
    fn env_overrides_replace_base_url_and_key() {
        let vars: HashMap<&str, &str> = [
            ("CHATDESK_BASE_URL", "http://override:9000"),
            ("CHATDESK_API_KEY", "gsk-test"),
        ]
        .into_iter()
        .collect();

        let mut config = ChatdeskConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.base_url, "http://override:9000");
        assert_eq!(config.chat.api_key.as_deref(), Some("gsk-test"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = ChatdeskConfig::default();
        config.apply_overrides_from(|_| Some("   ".to_string()));
        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert!(config.chat.api_key.is_none());
    }

    #[test]
    fn workspace_file_takes_precedence() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("chatdesk.toml"),
            "[server]\nbase_url = \"http://workspace:1\"\n",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join(".chatdesk")).unwrap();
        std::fs::write(
            dir.path().join(".chatdesk").join("chatdesk.toml"),
            "[server]\nbase_url = \"http://nested:2\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        assert_eq!(manager.config().server.base_url, "http://workspace:1");
        assert_eq!(
            manager.config_path(),
            Some(dir.path().join("chatdesk.toml").as_path())
        );
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chatdesk.toml");
        std::fs::write(&path, "[server\nbase_url = 1").unwrap();

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn config_renders_back_to_toml() {
        let rendered = ChatdeskConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[server]"));
        assert!(rendered.contains("base_url = \"http://localhost:8000\""));
        assert!(!rendered.contains("api_key"));
    }
}
