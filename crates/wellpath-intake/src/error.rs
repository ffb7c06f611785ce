use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("intake payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
