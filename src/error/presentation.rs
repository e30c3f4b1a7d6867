use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("DOM Error: {0}")]
    Dom(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = PresentationError> = std::result::Result<T, E>;
