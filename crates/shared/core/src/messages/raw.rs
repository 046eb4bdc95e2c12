use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EnrichedMessage, MessageFields};
use crate::values::FieldMap;

/// Untyped inbound message, exactly as the producer sent it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMessage(FieldMap);

impl RawMessage {
    pub fn new(fields: FieldMap) -> Self {
        Self(fields)
    }

    /// Parse a JSON object. Any other JSON value is rejected.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Builder: Set a field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl MessageFields for RawMessage {
    fn fields(&self) -> &FieldMap {
        &self.0
    }
}

impl From<FieldMap> for RawMessage {
    fn from(fields: FieldMap) -> Self {
        Self(fields)
    }
}

impl From<EnrichedMessage> for RawMessage {
    fn from(message: EnrichedMessage) -> Self {
        Self(message.into_fields())
    }
}

impl std::fmt::Display for RawMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
