use super::{Domain, Message, Variant};
use crate::backend::{AnyChatBackend, ExchangeRequest};
use crate::error::ClientError;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SessionState {
    messages: Vec<Message>,
    session_id: Option<String>,
    domain: Domain,
    draft: String,
    busy: bool,
    last_routed_domain: Option<String>,
}

/// Result of one [`ChatSession::submit`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing changed and nothing was sent
    Ignored,
    /// Another exchange is in flight; nothing changed and nothing was sent
    Busy,
    /// The backend answered; the reply was appended to the log
    Replied(Message),
    /// The exchange failed; an `Error: ...` turn was appended to the log
    Failed(ClientError),
}

impl SubmitOutcome {
    /// Whether an exchange was attempted
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Replied(_) | Self::Failed(_))
    }
}

/// Clears the busy flag when the exchange finishes or its future is dropped
struct BusyGuard<'a> {
    state: &'a Mutex<SessionState>,
    armed: bool,
}

impl BusyGuard<'_> {
    fn release(mut self, state: &mut SessionState) {
        state.busy = false;
        self.armed = false;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.lock().busy = false;
        }
    }
}

/// A conversation with one chat backend.
///
/// Owns the append-only log, the session identifier issued by the backend,
/// the domain selector, the composer draft and the busy flag. Handles are
/// cheap to clone and share the same state, so the busy flag can be watched
/// from another task while an exchange is in flight. At most one exchange
/// runs at a time: a [`submit`](Self::submit) while busy is rejected.
#[derive(Clone)]
pub struct ChatSession {
    backend: AnyChatBackend,
    state: Arc<Mutex<SessionState>>,
}

impl ChatSession {
    pub fn new(backend: AnyChatBackend) -> Self {
        Self::with_domain(backend, Domain::default())
    }

    pub fn with_domain(backend: AnyChatBackend, domain: Domain) -> Self {
        let state = SessionState {
            domain,
            ..SessionState::default()
        };
        Self {
            backend,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Send one user turn and append the backend's answer.
    ///
    /// The request carries the log as it stands right after the new user
    /// message is appended. Failures are recorded in the log as an
    /// assistant turn and returned as [`SubmitOutcome::Failed`]; they are
    /// never retried.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let (request, guard) = {
            let mut state = self.state.lock();
            if state.busy {
                tracing::debug!("submit rejected: exchange already in flight");
                return SubmitOutcome::Busy;
            }

            state.messages.push(Message::user(text));
            state.draft.clear();
            state.busy = true;

            let request = ExchangeRequest {
                messages: state.messages.clone(),
                domain: state.domain,
                session_id: state.session_id.clone(),
            };
            let guard = BusyGuard {
                state: &self.state,
                armed: true,
            };
            (request, guard)
        };

        let result = self.backend.exchange(&request).await;

        let mut state = self.state.lock();
        let outcome = match result {
            Ok(reply) => {
                if let Some(session_id) = reply.session_id {
                    if state.session_id.as_deref() != Some(session_id.as_str()) {
                        tracing::debug!(%session_id, "adopted session id");
                    }
                    state.session_id = Some(session_id);
                }
                if reply.routed_domain.is_some() {
                    state.last_routed_domain = reply.routed_domain;
                }
                let message = Message::assistant(reply.reply);
                state.messages.push(message.clone());
                SubmitOutcome::Replied(message)
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "chat exchange failed: {err}");
                state.messages.push(Message::assistant(err.display_text()));
                SubmitOutcome::Failed(err)
            }
        };
        guard.release(&mut state);
        outcome
    }

    /// Submit whatever is in the composer draft
    pub async fn send_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }

    /// Pick the domain used by the next submit
    pub fn select_mode(&self, domain: Domain) {
        self.state.lock().domain = domain;
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state.lock().draft = text.into();
    }

    pub fn draft(&self) -> String {
        self.state.lock().draft.clone()
    }

    /// Snapshot of the conversation log
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().messages.is_empty()
    }

    pub fn session_id(&self) -> Option<String> {
        self.state.lock().session_id.clone()
    }

    pub fn domain(&self) -> Domain {
        self.state.lock().domain
    }

    /// Domain the backend last reported routing to
    pub fn last_routed_domain(&self) -> Option<String> {
        self.state.lock().last_routed_domain.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().busy
    }

    pub fn variant(&self) -> Variant {
        self.backend.variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ChatBackend, ExchangeReply};
    use crate::chat::Role;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply, ClientError> {
            let last = request
                .latest_user_message()
                .map(|m| m.content().to_string())
                .unwrap_or_default();
            Ok(ExchangeReply {
                reply: format!("echo: {last}"),
                session_id: Some("s-1".to_string()),
                routed_domain: Some(request.domain.as_str().to_string()),
            })
        }

        fn variant(&self) -> Variant {
            Variant::Domain
        }
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let session = ChatSession::new(Arc::new(Echo));
        assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(session.submit(" \n\t").await, SubmitOutcome::Ignored);
        assert!(session.is_empty());
        assert!(session.session_id().is_none());
    }

    #[tokio::test]
    async fn reply_is_appended_after_user_turn() {
        let session = ChatSession::new(Arc::new(Echo));
        let outcome = session.submit("hello").await;

        assert!(outcome.was_sent());
        let log = session.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].role(), Role::User);
        assert_eq!(log[1].content(), "echo: hello");
        assert_eq!(session.session_id().as_deref(), Some("s-1"));
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn send_draft_clears_the_draft() {
        let session = ChatSession::new(Arc::new(Echo));
        session.set_draft("from the composer");
        session.send_draft().await;

        assert_eq!(session.draft(), "");
        assert_eq!(session.messages()[0].content(), "from the composer");
    }

    #[tokio::test]
    async fn select_mode_applies_to_next_submit_only() {
        let session = ChatSession::with_domain(Arc::new(Echo), Domain::Hr);
        session.submit("first").await;
        assert_eq!(session.last_routed_domain().as_deref(), Some("hr"));

        session.select_mode(Domain::Legal);
        assert_eq!(session.len(), 2);
        assert_eq!(session.session_id().as_deref(), Some("s-1"));

        session.submit("second").await;
        assert_eq!(session.last_routed_domain().as_deref(), Some("legal"));
    }
}
