//! Remote collaborators of the chat and attachment clients.
//!
//! The clients only see the [`ChatBackend`] and [`AttachmentStore`] traits.
//! The reqwest implementations here encode the two wire variants and the
//! attachment endpoints; tests substitute in-memory fakes.

pub mod domain;
pub mod files;
pub mod health;
mod http;
pub mod persona;

use crate::attachments::{Attachment, UploadFile, UploadReceipt};
use crate::chat::{Domain, Message, Variant};
use crate::config::ChatdeskConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use std::sync::Arc;

pub use domain::DomainChatBackend;
pub use files::HttpAttachmentStore;
pub use health::{HealthStatus, probe_health};
pub use persona::PersonaChatBackend;

/// Everything a backend needs to answer one turn
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRequest {
    /// Full log, ending with the newest user message
    pub messages: Vec<Message>,
    pub domain: Domain,
    pub session_id: Option<String>,
}

impl ExchangeRequest {
    /// The newest user message, if the log ends with one
    pub fn latest_user_message(&self) -> Option<&Message> {
        self.messages.last().filter(|message| message.is_user())
    }
}

/// Successful reply from a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeReply {
    pub reply: String,
    /// Session identifier to adopt for later requests
    pub session_id: Option<String>,
    /// Domain the backend reports it routed the turn to
    pub routed_domain: Option<String>,
}

impl ExchangeReply {
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            session_id: None,
            routed_domain: None,
        }
    }
}

/// Remote chat service
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply, ClientError>;

    fn variant(&self) -> Variant;
}

/// Remote flat namespace of uploaded files
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Attachment>, ClientError>;

    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, ClientError>;
}

/// Shared chat backend handle
pub type AnyChatBackend = Arc<dyn ChatBackend>;

/// Shared attachment store handle
pub type AnyAttachmentStore = Arc<dyn AttachmentStore>;

/// Create the chat backend selected by the configuration
pub fn make_chat_backend(config: &ChatdeskConfig) -> Result<AnyChatBackend, ClientError> {
    let backend: AnyChatBackend = match config.chat.variant {
        Variant::Domain => Arc::new(DomainChatBackend::from_config(config)?),
        Variant::Persona => Arc::new(PersonaChatBackend::from_config(config)?),
    };
    tracing::debug!(
        variant = %config.chat.variant,
        endpoint = %config.endpoint(config.chat.resolved_chat_path()),
        "created chat backend"
    );
    Ok(backend)
}

/// Create the attachment store for the configured server
pub fn make_attachment_store(config: &ChatdeskConfig) -> Result<AnyAttachmentStore, ClientError> {
    Ok(Arc::new(HttpAttachmentStore::from_config(config)?))
}
