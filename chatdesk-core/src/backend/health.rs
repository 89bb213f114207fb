use super::http::{build_http_client, decode_json};
use crate::config::ChatdeskConfig;
use crate::error::ClientError;
use serde::Deserialize;
use std::fmt;

/// Body of `GET /health`.
///
/// Both backends answer with a `status`; the persona service also names the
/// model provider it is currently using.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(provider) = &self.provider {
            write!(f, " (provider: {provider}")?;
            if let Some(model) = &self.model {
                write!(f, ", model: {model}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Ask the configured backend whether it is up
pub async fn probe_health(config: &ChatdeskConfig) -> Result<HealthStatus, ClientError> {
    let http_client = build_http_client(config.request_timeout())?;
    let url = config.endpoint(&config.server.health_path);
    let response = http_client
        .get(&url)
        .send()
        .await
        .map_err(ClientError::from)?;
    decode_json(response, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_status() {
        let status: HealthStatus = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(status.is_ok());
        assert_eq!(status.to_string(), "ok");
    }

    #[test]
    fn provider_details() {
        let status: HealthStatus = serde_json::from_value(json!({
            "status": "ok",
            "provider": "openrouter",
            "model": "gpt-4o-mini"
        }))
        .unwrap();
        assert_eq!(
            status.to_string(),
            "ok (provider: openrouter, model: gpt-4o-mini)"
        );
    }

    #[test]
    fn dev_fallback_without_model() {
        let status: HealthStatus =
            serde_json::from_value(json!({"status": "ok", "provider": "dev-fallback"})).unwrap();
        assert_eq!(status.to_string(), "ok (provider: dev-fallback)");
    }
}
