use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input bundle: {0}")]
    InvalidInput(String),

    #[error("Invalid compound definition: {0}")]
    InvalidCompound(String),

    #[error("Parameter validation error: {0}")]
    Validation(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
