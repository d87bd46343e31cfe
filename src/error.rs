use thiserror::Error;

/// Failure of a single event dump. Later events are unaffected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DumpError {
    #[error("invalid input: inbound push event is absent")]
    InvalidInput,
}

/// A single field could not be read. Recovered where it happens and rendered
/// as an absent value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("field '{field}' unavailable: {reason}")]
pub struct FieldUnavailable {
    pub field: String,
    pub reason: String,
}

impl FieldUnavailable {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid event json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Dump(#[from] DumpError),
}
