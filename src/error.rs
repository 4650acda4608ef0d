use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Validation(&'static str),

    #[error("Backend rejected request with status {status}")]
    Backend { status: u16, message: Option<String> },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl ClientError {
    /// Message to show the user, falling back to a per-action string.
    ///
    /// Transport and decode failures never leak their details; they always
    /// show the fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(message) => message.to_string(),
            ClientError::Backend {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Decode(_))
    }
}
