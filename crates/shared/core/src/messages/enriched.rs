use serde::Serialize;
use serde_json::Value;

use super::MessageFields;
use crate::entities::{AlphaSignal, CONFIDENCE_KEY, REASON_KEY, SIGNAL_KEY, SignalKind};
use crate::values::FieldMap;

/// Validated message fields merged with a computed signal
///
/// Signal fields win over same-named input fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnrichedMessage(FieldMap);

impl EnrichedMessage {
    /// Merge `signal` into `fields`
    pub fn enrich(mut fields: FieldMap, signal: &AlphaSignal) -> Self {
        signal.apply_to(&mut fields);
        Self(fields)
    }

    pub fn signal(&self) -> Option<SignalKind> {
        self.0
            .get(SIGNAL_KEY)
            .and_then(Value::as_str)
            .and_then(SignalKind::parse)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.0.get(CONFIDENCE_KEY).and_then(Value::as_f64)
    }

    pub fn reason(&self) -> Option<&str> {
        self.0.get(REASON_KEY).and_then(Value::as_str)
    }

    pub fn into_fields(self) -> FieldMap {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl MessageFields for EnrichedMessage {
    fn fields(&self) -> &FieldMap {
        &self.0
    }
}

impl std::fmt::Display for EnrichedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
