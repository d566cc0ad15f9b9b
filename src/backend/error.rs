//! Errors reported by the backend collaborators

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a failure status
    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },
}

impl BackendError {
    /// Human-readable reason supplied by the backend, if any
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            BackendError::Transport(message) => Some(message.as_str()),
            BackendError::Rejected { message, .. } => message.as_deref(),
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => BackendError::Rejected {
                status: status.as_u16(),
                message: None,
            },
            None => BackendError::Transport(err.to_string()),
        }
    }
}
