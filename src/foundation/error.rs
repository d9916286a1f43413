/// Convenience result type used across doodlegen.
pub type DoodleResult<T> = Result<T, DoodleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// A composition failing the quality check is not an error; see
/// [`crate::Quality`].
#[derive(thiserror::Error, Debug)]
pub enum DoodleError {
    /// Malformed composition or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The caller broke an API contract (wrong slot count, unknown name, ...).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoodleError {
    /// Build a [`DoodleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DoodleError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`DoodleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DoodleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
