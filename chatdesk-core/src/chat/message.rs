use crate::config::constants::message_roles;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => message_roles::USER,
            Self::Assistant => message_roles::ASSISTANT,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation log.
///
/// Fields are private so a message cannot be edited once it is in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_role_content_pair() {
        let value = serde_json::to_value(Message::user("What is the PTO policy?")).unwrap();
        assert_eq!(
            value,
            json!({"role": "user", "content": "What is the PTO policy?"})
        );
    }

    #[test]
    fn deserializes_assistant_role() {
        let message: Message =
            serde_json::from_value(json!({"role": "assistant", "content": "15 days/year"}))
                .unwrap();
        assert_eq!(message.role(), Role::Assistant);
        assert_eq!(message.content(), "15 days/year");
        assert!(!message.is_user());
    }

    #[test]
    fn rejects_unknown_role() {
        let result: Result<Message, _> =
            serde_json::from_value(json!({"role": "system", "content": "x"}));
        assert!(result.is_err());
    }
}
