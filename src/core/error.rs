//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LogError>;

/// Failures a sink can report when accepting a line.
///
/// Nothing in the emitting surface of this crate propagates these to
/// callers; the emitter discards write failures so that logging never
/// disrupts the host program. The type exists for sink implementors and
/// for embedders that drive a [`Sink`](crate::core::Sink) directly.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error from the underlying destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Destination-specific failure
    #[error("sink error: {0}")]
    Sink(String),
}

impl LogError {
    /// Create a destination-specific error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LogError::Sink(msg.into())
    }
}
