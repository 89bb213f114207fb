use super::http::{build_http_client, decode_json};
use super::{ChatBackend, ExchangeReply, ExchangeRequest};
use crate::chat::{Message, Role, Variant};
use crate::config::ChatdeskConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

/// Backend speaking the persona wire format (`POST /chat`).
///
/// The persona service keeps no sessions: each request carries the newest
/// message and the prior turns as paired history records.
pub struct PersonaChatBackend {
    http_client: HttpClient,
    url: String,
}

/// One history record. Exactly one side is populated per turn; the other is
/// sent as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTurn<'a> {
    pub user: &'a str,
    pub assistant: &'a str,
}

impl<'a> From<&'a Message> for HistoryTurn<'a> {
    fn from(message: &'a Message) -> Self {
        match message.role() {
            Role::User => Self {
                user: message.content(),
                assistant: "",
            },
            Role::Assistant => Self {
                user: "",
                assistant: message.content(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PersonaChatRequest<'a> {
    pub message: &'a str,
    pub history: Vec<HistoryTurn<'a>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonaChatResponse {
    pub reply: String,
}

impl<'a> PersonaChatRequest<'a> {
    pub(crate) fn from_log(messages: &'a [Message]) -> Self {
        match messages.split_last() {
            Some((last, prior)) if last.is_user() => Self {
                message: last.content(),
                history: prior.iter().map(HistoryTurn::from).collect(),
            },
            _ => Self {
                message: "",
                history: messages.iter().map(HistoryTurn::from).collect(),
            },
        }
    }
}

impl PersonaChatBackend {
    pub fn new(http_client: HttpClient, url: String) -> Self {
        Self { http_client, url }
    }

    pub fn from_config(config: &ChatdeskConfig) -> Result<Self, ClientError> {
        let http_client = build_http_client(config.request_timeout())?;
        Ok(Self::new(
            http_client,
            config.endpoint(config.chat.resolved_chat_path()),
        ))
    }
}

#[async_trait]
impl ChatBackend for PersonaChatBackend {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply, ClientError> {
        let body = PersonaChatRequest::from_log(&request.messages);
        tracing::debug!(
            url = %self.url,
            history = body.history.len(),
            "sending persona chat exchange"
        );

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from)?;

        let decoded: PersonaChatResponse = decode_json(response, &self.url).await?;
        Ok(ExchangeReply::text(decoded.reply))
    }

    fn variant(&self) -> Variant {
        Variant::Persona
    }
}
