//! Client error taxonomy shared by the chat and attachment clients.

use crate::config::constants::display;

/// Failure of a single network-originating operation.
///
/// Every variant carries a human-readable message. Conversion to the text that
/// ends up in the conversation log happens in [`ClientError::display_text`], at
/// the presentation boundary only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Network failure: {message}")]
    NetworkFailure { message: String },
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
    #[error("Upload failure: {message}")]
    UploadFailure { message: String },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::UploadFailure {
            message: message.into(),
        }
    }

    /// The message carried by the variant, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::NetworkFailure { message }
            | Self::MalformedResponse { message }
            | Self::UploadFailure { message } => message,
        }
    }

    /// Short tag for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure { .. } => "network",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::UploadFailure { .. } => "upload",
        }
    }

    /// Text appended to the conversation log as an assistant turn
    pub fn display_text(&self) -> String {
        format!("{}{}", display::ERROR_PREFIX, self.message())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed(err.to_string())
        } else if err.is_timeout() {
            Self::network(format!("request timed out: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}
