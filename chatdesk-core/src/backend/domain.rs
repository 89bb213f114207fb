use super::http::{build_http_client, decode_json};
use super::{ChatBackend, ExchangeReply, ExchangeRequest};
use crate::chat::{Message, Variant};
use crate::config::ChatdeskConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

/// Backend speaking the domain-aware wire format (`POST /api/chat`)
pub struct DomainChatBackend {
    http_client: HttpClient,
    url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DomainChatRequest<'a> {
    pub domain: &'a str,
    pub session_id: Option<&'a str>,
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DomainChatResponse {
    pub reply: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl DomainChatBackend {
    pub fn new(http_client: HttpClient, url: String, api_key: Option<String>) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }

    pub fn from_config(config: &ChatdeskConfig) -> Result<Self, ClientError> {
        let http_client = build_http_client(config.request_timeout())?;
        Ok(Self::new(
            http_client,
            config.endpoint(config.chat.resolved_chat_path()),
            config.chat.api_key.clone(),
        ))
    }

    pub(crate) fn build_body<'a>(&'a self, request: &'a ExchangeRequest) -> DomainChatRequest<'a> {
        DomainChatRequest {
            domain: request.domain.as_str(),
            session_id: request.session_id.as_deref(),
            messages: &request.messages,
            api_key: self.api_key.as_deref(),
        }
    }
}

impl From<DomainChatResponse> for ExchangeReply {
    fn from(response: DomainChatResponse) -> Self {
        Self {
            reply: response.reply,
            session_id: response.session_id.filter(|id| !id.is_empty()),
            routed_domain: response.domain,
        }
    }
}

#[async_trait]
impl ChatBackend for DomainChatBackend {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply, ClientError> {
        let body = self.build_body(request);
        tracing::debug!(
            url = %self.url,
            domain = body.domain,
            turns = request.messages.len(),
            has_session = request.session_id.is_some(),
            "sending chat exchange"
        );

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from)?;

        let decoded: DomainChatResponse = decode_json(response, &self.url).await?;
        Ok(decoded.into())
    }

    fn variant(&self) -> Variant {
        Variant::Domain
    }
}
