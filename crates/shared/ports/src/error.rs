use thiserror::Error;

/// Domain-level errors for message validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The schema checker rejected the message. The offending message is
    /// reported through the log, not carried here.
    #[error("Invalid message format")]
    InvalidFormat,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
