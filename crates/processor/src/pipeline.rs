//! Message Processor - validate then enrich
//!
//! Chains the [`Validator`] and the [`SignalComputer`]. A rejected message
//! never reaches the signal computer; rejection is terminal for that message
//! only, so batches keep going.

use alpha_core::{EnrichedMessage, RawMessage};
use alpha_ports::{SchemaCheck, ValidationResult};
use alpha_schema::FieldSchema;
use log::info;

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::signal::SignalComputer;
use crate::validator::Validator;

/// Result of processing a batch of messages
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Enriched messages, in input order
    pub enriched: Vec<EnrichedMessage>,
    /// Messages rejected by the schema
    pub rejected: usize,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.enriched.len() + self.rejected
    }
}

/// Validate → compute pipeline
pub struct MessageProcessor<S> {
    validator: Validator<S>,
    computer: SignalComputer,
}

impl MessageProcessor<FieldSchema> {
    /// Build a processor with a [`FieldSchema`] from configuration
    pub fn from_config(config: &ProcessorConfig) -> Result<Self> {
        let schema = FieldSchema::new(config.schema.clone())?
            .with_logger(config.validator_logger.clone());
        Ok(Self::new(
            Validator::new(schema).with_logger(config.validator_logger.clone()),
            SignalComputer::new().with_logger(config.signal_logger.clone()),
        ))
    }
}

impl<S: SchemaCheck> MessageProcessor<S> {
    pub fn new(validator: Validator<S>, computer: SignalComputer) -> Self {
        Self {
            validator,
            computer,
        }
    }

    /// Processor with default logger targets
    pub fn with_schema(schema: S) -> Self {
        Self::new(Validator::new(schema), SignalComputer::new())
    }

    pub fn validator(&self) -> &Validator<S> {
        &self.validator
    }

    /// Validate `message` and attach the signal
    pub fn process(&self, message: RawMessage) -> ValidationResult<EnrichedMessage> {
        let validated = self.validator.validate_input_message(message)?;
        Ok(self.computer.compute_signal(validated))
    }

    /// Parse a JSON object and process it
    pub fn process_json(&self, json: &str) -> Result<EnrichedMessage> {
        let message = RawMessage::from_json_str(json)?;
        Ok(self.process(message)?)
    }

    /// Process every message, counting rejections instead of stopping
    pub fn process_batch<I>(&self, messages: I) -> BatchOutcome
    where
        I: IntoIterator<Item = RawMessage>,
    {
        let mut outcome = BatchOutcome::default();
        for message in messages {
            match self.process(message) {
                Ok(enriched) => outcome.enriched.push(enriched),
                Err(_) => outcome.rejected += 1,
            }
        }

        info!(
            "Processed batch: total={}, enriched={}, rejected={}",
            outcome.total(),
            outcome.enriched.len(),
            outcome.rejected
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessorError;
    use alpha_core::MessageFields;
    use alpha_ports::ValidationError;

    fn aapl() -> RawMessage {
        RawMessage::default()
            .with_field("symbol", "AAPL")
            .with_field("timestamp", "2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_process_accepted_message() {
        let processor = MessageProcessor::with_schema(FieldSchema::default());

        let enriched = processor.process(aapl()).unwrap();

        assert_eq!(enriched.symbol(), Some("AAPL"));
        assert_eq!(enriched.len(), 5);
    }

    #[test]
    fn test_rejected_message_skips_signal_computer() {
        let processor = MessageProcessor::with_schema(FieldSchema::default());

        assert_eq!(
            processor.process(RawMessage::default()),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_batch_counts_rejections() {
        let processor = MessageProcessor::with_schema(FieldSchema::default());
        let batch = vec![
            aapl(),
            RawMessage::default(),
            aapl().with_field("symbol", "MSFT"),
            aapl().with_field("timestamp", "soon"),
        ];

        let outcome = processor.process_batch(batch);

        assert_eq!(outcome.total(), 4);
        assert_eq!(outcome.rejected, 2);
        assert_eq!(outcome.enriched[0].symbol(), Some("AAPL"));
        assert_eq!(outcome.enriched[1].symbol(), Some("MSFT"));
    }

    #[test]
    fn test_process_json() {
        let processor = MessageProcessor::with_schema(FieldSchema::default());

        let enriched = processor
            .process_json(r#"{"symbol":"AAPL","timestamp":"2024-01-01T00:00:00Z"}"#)
            .unwrap();
        assert_eq!(enriched.reason(), Some("Default placeholder signal logic"));

        assert!(matches!(
            processor.process_json("[]"),
            Err(ProcessorError::Parse(_))
        ));
        assert!(matches!(
            processor.process_json("{}"),
            Err(ProcessorError::Validation(ValidationError::InvalidFormat))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = ProcessorConfig::from_json_str(
            r#"{"schema": {"fields": [{"name": "ticker", "kind": "string"}]}}"#,
        )
        .unwrap();
        let processor = MessageProcessor::from_config(&config).unwrap();

        assert_eq!(processor.validator().schema().config().fields.len(), 1);
        assert!(
            processor
                .process(RawMessage::default().with_field("ticker", "AAPL"))
                .is_ok()
        );
        assert!(processor.process(aapl()).is_err());
    }
}
