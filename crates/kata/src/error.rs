use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("exercise is missing the required `id` attribute")]
    MissingId,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
