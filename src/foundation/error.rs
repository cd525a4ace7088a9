/// Convenience result type used across wordcycle.
pub type WordcycleResult<T> = Result<T, WordcycleError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum WordcycleError {
    /// Options or target letters that cannot produce well-formed markup.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Data handed to a pipeline stage that violates its preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or formatting.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WordcycleError {
    /// Build a [`WordcycleError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`WordcycleError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`WordcycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<std::fmt::Error> for WordcycleError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Other(anyhow::Error::new(err))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
