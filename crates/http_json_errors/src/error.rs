use thiserror::Error;

/// Failure while delivering an error response
#[derive(Debug, Error)]
pub enum SendError {
    /// The record could not be encoded
    #[error("failed to serialize error record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The response writer rejected the body
    #[error("failed to write error response: {0}")]
    Io(#[from] std::io::Error),

    /// Raised by a user-supplied send strategy
    #[error("send strategy failed: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl SendError {
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Custom(err.into())
    }
}
