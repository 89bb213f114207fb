//! # chatdesk-core
//!
//! Client side of the chatdesk assistants: a conversation session that relays
//! turns to a remote chat backend, and a directory client for the attachment
//! store that sits next to it.
//!
//! ## Architecture Overview
//!
//! - `chat/`: [`ChatSession`], the append-only message log, the domain selector
//!   and the session identifier issued by the backend.
//! - `attachments/`: [`AttachmentDirectory`], a cached view of the remote
//!   listing that is resynchronized after every upload.
//! - `backend/`: the [`ChatBackend`] and [`AttachmentStore`] seams plus their
//!   reqwest implementations for the `domain` and `persona` wire variants.
//! - `config/`: `chatdesk.toml` loading and `CHATDESK_*` overrides.
//! - `ui/`: terminal rendering, where errors are turned into text.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use chatdesk_core::{ChatSession, ChatdeskConfig, SubmitOutcome, make_chat_backend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let config = ChatdeskConfig::default();
//!     let session = ChatSession::new(make_chat_backend(&config)?);
//!
//!     if let SubmitOutcome::Replied(reply) = session.submit("What is the PTO policy?").await {
//!         println!("{}", reply.content());
//!     }
//!     Ok(())
//! }
//! ```

pub mod attachments;
pub mod backend;
pub mod chat;
pub mod config;
pub mod error;
pub mod ui;

pub use attachments::{Attachment, AttachmentDirectory, UploadFile, UploadOutcome};
pub use backend::{
    AnyAttachmentStore, AnyChatBackend, AttachmentStore, ChatBackend, ExchangeReply,
    ExchangeRequest, make_attachment_store, make_chat_backend, probe_health,
};
pub use chat::{ChatSession, Domain, Message, Role, SubmitOutcome, Variant};
pub use config::{ChatdeskConfig, ConfigManager};
pub use error::ClientError;
