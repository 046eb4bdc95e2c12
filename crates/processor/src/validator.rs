//! Validator - gate between producer data and the signal computer

use alpha_core::{FieldMap, MessageFields, RawMessage};
use alpha_ports::{SchemaCheck, ValidationError, ValidationResult};
use log::{debug, error};

/// Default logger target for the validator
pub const VALIDATOR_LOGGER: &str = "alpha_processor::validator";

/// Message that passed the schema check when it was created
///
/// Only [`Validator`] can build one. Holds the producer's fields unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMessage(FieldMap);

impl ValidatedMessage {
    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl MessageFields for ValidatedMessage {
    fn fields(&self) -> &FieldMap {
        &self.0
    }
}

/// Checks raw messages against a schema
pub struct Validator<S> {
    schema: S,
    logger: String,
}

impl<S: SchemaCheck> Validator<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            logger: VALIDATOR_LOGGER.to_string(),
        }
    }

    /// Builder: Log under a different target
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Pass `message` through unchanged if the schema accepts it
    pub fn validate_input_message(&self, message: RawMessage) -> ValidationResult<ValidatedMessage> {
        validate_with(&self.schema, message, &self.logger)
    }
}

/// Validate `message` against `schema` with the default logger target
pub fn validate_input_message<S: SchemaCheck>(
    message: RawMessage,
    schema: &S,
) -> ValidationResult<ValidatedMessage> {
    validate_with(schema, message, VALIDATOR_LOGGER)
}

fn validate_with<S: SchemaCheck + ?Sized>(
    schema: &S,
    message: RawMessage,
    logger: &str,
) -> ValidationResult<ValidatedMessage> {
    debug!(target: logger, "Validating message schema...");
    if !schema.check(&message) {
        error!(target: logger, "Invalid message schema: {}", message);
        return Err(ValidationError::InvalidFormat);
    }
    Ok(ValidatedMessage(message.into_fields()))
}
