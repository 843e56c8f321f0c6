use thiserror::Error;

#[derive(Error, Debug)]
pub enum HorseDebugError {
    #[error("File access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Config(String),

    #[error("Invalid stat or entity data: {0}")]
    Validation(String),

    #[error("HorseDebug is already registered through the {0} adapter")]
    AlreadyRegistered(String),
}

pub type HdResult<T> = Result<T, HorseDebugError>;
