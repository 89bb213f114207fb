//! Chat session client
//!
//! [`ChatSession`] keeps the conversation log and relays turns to a
//! [`ChatBackend`](crate::backend::ChatBackend).

mod domain;
mod message;
mod session;

pub use domain::{Domain, ParseDomainError, Variant};
pub use message::{Message, Role};
pub use session::{ChatSession, SubmitOutcome};
