use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No profile stored for user: {0}")]
    ProfileNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
