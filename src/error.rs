use crate::input::InputError;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
