//! Processor errors

use alpha_ports::ValidationError;
use alpha_schema::SchemaConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaConfigError),
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
