//! Error taxonomy. Sub-errors convert into [`CausaError`] via `From`.

mod causal_error;

pub use causal_error::CausalError;

/// Top-level error for the causa workspace.
#[derive(Debug, thiserror::Error)]
pub enum CausaError {
    #[error(transparent)]
    CausalError(#[from] CausalError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type CausaResult<T> = Result<T, CausaError>;

impl CausaError {
    /// The path/graph error behind this one, if any.
    pub fn as_causal(&self) -> Option<&CausalError> {
        match self {
            Self::CausalError(err) => Some(err),
            _ => None,
        }
    }
}
