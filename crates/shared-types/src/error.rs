use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of profile-fetch failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The backend answered 2xx with `success: false`.
    Rejected,
    /// The backend answered with a non-2xx status.
    Status,
    /// The request never produced a response (DNS, connection, CORS, ...).
    Transport,
    /// A 2xx body that is not a usable envelope.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Rejected => write!(f, "Rejected"),
            ApiErrorKind::Status => write!(f, "Status"),
            ApiErrorKind::Transport => write!(f, "Transport"),
            ApiErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Error returned by backend calls.
///
/// `message` holds the server-supplied message when there was one; the
/// diagnostic `detail` never reaches the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl ApiError {
    pub fn rejected(message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            status: None,
            message,
            detail: String::new(),
        }
    }

    pub fn status(status: u16, message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            status: Some(status),
            message,
            detail: String::new(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    /// Message to show the user: the server's own message when it sent a
    /// non-blank one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(status) = self.status {
            write!(f, " ({status})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if !self.detail.is_empty() {
            write!(f, " [{}]", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
