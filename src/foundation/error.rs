/// Convenience result type used across algotrace.
pub type TraceResult<T> = Result<T, TraceError>;

/// Top-level error taxonomy used by generator and session APIs.
///
/// Generation itself never fails once input has been validated, and playback misuse degrades to
/// no-ops, so every variant here is raised before a trace exists.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// Invalid user-provided algorithm input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid session or playback configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing inputs, configs, or traces.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceError {
    /// Build a [`TraceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TraceError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TraceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors the user can fix by correcting input and retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Serde(_))
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
