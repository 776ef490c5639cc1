//! Shared error types across Tigon crates.

use thiserror::Error;

/// Why an inbound bridge message could not be read as an envelope.
///
/// This set is closed: every parse failure maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProtocolError {
    /// The message body was not a string-keyed mapping.
    #[error("unexpected message format")]
    MalformedEnvelope,
    /// The `id` key was missing or its value was not a string.
    #[error("message id missing or not a string")]
    MissingId,
    /// The `payload` key was missing.
    #[error("message payload missing")]
    MissingPayload,
}

impl ProtocolError {
    /// Stable code, used in logs and test vectors.
    pub fn code(self) -> &'static str {
        match self {
            ProtocolError::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ProtocolError::MissingId => "MISSING_ID",
            ProtocolError::MissingPayload => "MISSING_PAYLOAD",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TigonError>;

/// Unified error type for bridge plumbing (channels, scripts, config).
#[derive(Debug, Error)]
pub enum TigonError {
    #[error("channel already registered: {0}")]
    ChannelInUse(String),
    #[error("no receiver installed for channel: {0}")]
    NotInstalled(String),
    #[error("message posted to unknown channel: {0}")]
    UnknownChannel(String),
    #[error("script evaluation failed: {0}")]
    Script(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
