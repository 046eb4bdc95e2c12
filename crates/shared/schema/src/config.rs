//! Schema configuration

use std::collections::HashSet;

use alpha_core::{SYMBOL_KEY, TIMESTAMP_KEY};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a schema from configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaConfigError {
    #[error("Field rule with empty name")]
    EmptyFieldName,

    #[error("Duplicate field rule: {0}")]
    DuplicateField(String),
}

/// Expected JSON shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Bool,
    Object,
    Array,
    /// RFC 3339 string
    Timestamp,
    /// Any value, including null
    Any,
}

impl FieldKind {
    /// Check whether a JSON value has this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Bool => value.is_boolean(),
            FieldKind::Object => value.is_object(),
            FieldKind::Array => value.is_array(),
            FieldKind::Timestamp => value
                .as_str()
                .is_some_and(|ts| DateTime::parse_from_rfc3339(ts).is_ok()),
            FieldKind::Any => true,
        }
    }
}

/// Rule for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl FieldRule {
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }
}

/// Message schema: declared fields plus the policy for undeclared ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub fields: Vec<FieldRule>,
    /// Accept keys that no rule declares
    pub allow_unknown_fields: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldRule::required(SYMBOL_KEY, FieldKind::String),
                FieldRule::required(TIMESTAMP_KEY, FieldKind::Timestamp),
            ],
            allow_unknown_fields: true,
        }
    }
}

impl SchemaConfig {
    /// Reject empty or duplicated field names
    pub fn validate(&self) -> Result<(), SchemaConfigError> {
        let mut seen = HashSet::new();
        for rule in &self.fields {
            if rule.name.is_empty() {
                return Err(SchemaConfigError::EmptyFieldName);
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(SchemaConfigError::DuplicateField(rule.name.clone()));
            }
        }
        Ok(())
    }

    /// Look up the rule for a field
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.name == name)
    }
}
