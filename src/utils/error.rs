//! Error handling for TeraPeek

use thiserror::Error;

/// Coarse classification of a transport-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// DNS failure, refused or reset connection, TLS handshake failure
    Unreachable,
    /// The platform timeout elapsed
    TimedOut,
    /// The proxy refused to serve us (redirect loop or redirect policy violation)
    Blocked,
    Other,
}

/// Main error type for TeraPeek
#[derive(Debug, Error)]
pub enum TeraPeekError {
    #[error("input is empty")]
    EmptyInput,

    #[error("no share identifier could be extracted from the input")]
    NoIdentifier,

    #[error("API request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("No direct link found in response")]
    MissingDirectLink,

    #[error("Transport error ({kind:?}): {message}")]
    Transport { kind: TransportKind, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to generate image: {0}")]
    ImageError(#[from] image::ImageError),
}

impl From<reqwest::Error> for TeraPeekError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return TeraPeekError::RequestFailed {
                status: status.as_u16(),
            };
        }

        let kind = if err.is_timeout() {
            TransportKind::TimedOut
        } else if err.is_connect() {
            TransportKind::Unreachable
        } else if err.is_redirect() {
            TransportKind::Blocked
        } else {
            TransportKind::Other
        };

        TeraPeekError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}

impl TeraPeekError {
    /// Text shown to the user in the message banner or on stderr
    pub fn user_message(&self) -> String {
        match self {
            TeraPeekError::EmptyInput => "Please enter a video ID or share link.".to_string(),
            TeraPeekError::NoIdentifier => {
                "Could not extract a valid ID from the input.".to_string()
            }
            TeraPeekError::RequestFailed { status } => {
                format!("API request failed with status {}", status)
            }
            TeraPeekError::MalformedResponse(_) => "Malformed API response.".to_string(),
            TeraPeekError::MissingDirectLink => "No direct link found in response.".to_string(),
            TeraPeekError::Transport { kind, .. } => match kind {
                TransportKind::Unreachable => {
                    "Network error - check your connection or try again later.".to_string()
                }
                TransportKind::TimedOut => {
                    "The worker proxy took too long to answer. Please try again.".to_string()
                }
                TransportKind::Blocked => {
                    "Request blocked by the worker proxy. Consider hosting your own proxy."
                        .to_string()
                }
                TransportKind::Other => {
                    "Failed to fetch metadata. Please try again.".to_string()
                }
            },
            TeraPeekError::Clipboard(_) => {
                "Copy failed - clipboard access is unavailable.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether the error was produced before any network traffic
    pub fn is_input_error(&self) -> bool {
        matches!(self, TeraPeekError::EmptyInput | TeraPeekError::NoIdentifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_carries_status() {
        let err = TeraPeekError::RequestFailed { status: 502 };
        assert_eq!(err.user_message(), "API request failed with status 502");
    }

    #[test]
    fn test_transport_messages_distinguish_kinds() {
        let unreachable = TeraPeekError::Transport {
            kind: TransportKind::Unreachable,
            message: "dns".to_string(),
        };
        let blocked = TeraPeekError::Transport {
            kind: TransportKind::Blocked,
            message: "redirect".to_string(),
        };
        assert!(unreachable.user_message().starts_with("Network error"));
        assert!(blocked.user_message().starts_with("Request blocked"));
    }

    #[test]
    fn test_input_errors() {
        assert!(TeraPeekError::EmptyInput.is_input_error());
        assert!(TeraPeekError::NoIdentifier.is_input_error());
        assert!(!TeraPeekError::MissingDirectLink.is_input_error());
    }
}
