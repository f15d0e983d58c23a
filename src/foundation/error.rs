/// Result alias used across the crate.
pub type ArResult<T> = Result<T, ArError>;

/// Crate error type.
///
/// UI handler failures (`Ui`) never escape the screen dispatcher; everything else propagates to
/// the session caller.
#[derive(thiserror::Error, Debug)]
pub enum ArError {
    /// Invalid configuration, script or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// A UI collaborator (label/button) was not bound when a handler touched it.
    #[error("ui error: {0}")]
    Ui(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// A frame sink failed to accept or write a frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArError {
    /// Build an [`ArError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArError::Ui`].
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }

    /// Build an [`ArError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ArError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`ArError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
