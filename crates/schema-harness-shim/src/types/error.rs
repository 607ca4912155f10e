//! Error types for the protocol shim.
//!
//! Every [`ShimError`] that reaches the transport loop is fatal: it means the
//! orchestrator and the shim have desynchronized. Problems with a test case's
//! data never surface here; the case runner reports those in-band.

/// All errors that can occur in the shim.
#[derive(thiserror::Error, Debug)]
pub enum ShimError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Unsupported protocol version: {0} (expected {expected})", expected = super::PROTOCOL_VERSION)]
    UnsupportedProtocolVersion(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShimError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShimError::MalformedInput(_)
            | ShimError::UnsupportedCommand(_)
            | ShimError::ProtocolViolation(_)
            | ShimError::UnsupportedProtocolVersion(_) => 2,
            ShimError::Config(_) => 3,
            ShimError::Io(_) | ShimError::Json(_) => 1,
        }
    }
}

impl From<schema_harness::HarnessError> for ShimError {
    fn from(e: schema_harness::HarnessError) -> Self {
        match e {
            schema_harness::HarnessError::InvalidUri { .. } => ShimError::MalformedInput(e.to_string()),
            other => ShimError::Config(other.to_string()),
        }
    }
}

pub type ShimResult<T> = Result<T, ShimError>;
