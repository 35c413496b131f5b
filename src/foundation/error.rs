/// Convenience result type used across the crate.
pub type CrosstileResult<T> = Result<T, CrosstileError>;

/// Top-level error type for crosstile.
#[derive(thiserror::Error, Debug)]
pub enum CrosstileError {
    /// Invalid configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface construction or resize failure.
    #[error("surface error: {0}")]
    Surface(String),

    /// Engine lifecycle failure (worker spawn, conflicting run modes).
    #[error("engine error: {0}")]
    Engine(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrosstileError {
    /// Build a [`CrosstileError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CrosstileError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`CrosstileError::Engine`] value.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Build a [`CrosstileError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
