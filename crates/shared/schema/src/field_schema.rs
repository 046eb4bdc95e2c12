use alpha_core::{MessageFields, RawMessage};
use alpha_ports::SchemaCheck;
use log::debug;
use serde_json::Value;

use crate::config::{FieldKind, SchemaConfig, SchemaConfigError};

/// Default logger target for schema checks
pub const DEFAULT_LOGGER: &str = "alpha_schema";

/// First rule a message breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingField(String),
    WrongKind { field: String, expected: FieldKind },
    UnknownField(String),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingField(field) => write!(f, "missing required field '{}'", field),
            Violation::WrongKind { field, expected } => {
                write!(f, "field '{}' is not of kind {:?}", field, expected)
            }
            Violation::UnknownField(field) => write!(f, "undeclared field '{}'", field),
        }
    }
}

/// Schema checker driven by per-field rules
pub struct FieldSchema {
    config: SchemaConfig,
    logger: String,
}

impl FieldSchema {
    /// Create a schema from configuration
    pub fn new(config: SchemaConfig) -> Result<Self, SchemaConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            logger: DEFAULT_LOGGER.to_string(),
        })
    }

    /// Builder: Log under a different target
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    /// Get the schema configuration
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Find the first rule `message` breaks, if any
    ///
    /// Declared fields are checked in declaration order, then undeclared keys.
    /// `null` on an optional field counts as absent.
    pub fn first_violation(&self, message: &RawMessage) -> Option<Violation> {
        for rule in &self.config.fields {
            match message.get(&rule.name) {
                None => {
                    if rule.required {
                        return Some(Violation::MissingField(rule.name.clone()));
                    }
                }
                Some(Value::Null) if !rule.required => {}
                Some(value) => {
                    if !rule.kind.matches(value) {
                        return Some(Violation::WrongKind {
                            field: rule.name.clone(),
                            expected: rule.kind,
                        });
                    }
                }
            }
        }

        if !self.config.allow_unknown_fields
            && let Some(key) = message
                .fields()
                .keys()
                .find(|key| self.config.rule(key).is_none())
        {
            return Some(Violation::UnknownField(key.clone()));
        }

        None
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            config: SchemaConfig::default(),
            logger: DEFAULT_LOGGER.to_string(),
        }
    }
}

impl SchemaCheck for FieldSchema {
    fn check(&self, message: &RawMessage) -> bool {
        match self.first_violation(message) {
            Some(violation) => {
                debug!(target: self.logger.as_str(), "Schema violation: {}", violation);
                false
            }
            None => true,
        }
    }

    fn name(&self) -> &str {
        "FieldSchema"
    }
}
