//! Alpha Signal - what the signal computer attaches to a message

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SignalKind;
use crate::values::FieldMap;

/// Key holding the trading decision
pub const SIGNAL_KEY: &str = "signal";
/// Key holding the confidence score
pub const CONFIDENCE_KEY: &str = "confidence";
/// Key holding the free-text reason
pub const REASON_KEY: &str = "reason";

/// Reason attached by the placeholder strategy
pub const PLACEHOLDER_REASON: &str = "Default placeholder signal logic";

/// Trading decision with a confidence score in [0, 1]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaSignal {
    pub kind: SignalKind,
    /// Confidence in the signal (0.0 - 1.0)
    pub confidence: Decimal,
    pub reason: String,
}

impl AlphaSignal {
    /// Create a new signal with full confidence
    pub fn new(kind: SignalKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            confidence: Decimal::ONE,
            reason: reason.into(),
        }
    }

    /// Fixed stand-in for a real strategy: HOLD at 0.5 confidence
    pub fn placeholder() -> Self {
        Self::new(SignalKind::Hold, PLACEHOLDER_REASON).with_confidence(Decimal::new(5, 1))
    }

    /// Builder: Set confidence
    pub fn with_confidence(mut self, confidence: Decimal) -> Self {
        self.confidence = confidence.clamp(Decimal::ZERO, Decimal::ONE);
        self
    }

    /// Confidence as a floating-point JSON number
    pub fn confidence_value(&self) -> Value {
        self.confidence
            .to_f64()
            .map(Value::from)
            .unwrap_or(Value::Null)
    }

    /// Write the three signal fields into `fields`, replacing existing keys
    pub fn apply_to(&self, fields: &mut FieldMap) {
        fields.insert(
            SIGNAL_KEY.to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        fields.insert(CONFIDENCE_KEY.to_string(), self.confidence_value());
        fields.insert(REASON_KEY.to_string(), Value::String(self.reason.clone()));
    }
}

impl std::fmt::Display for AlphaSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{signal: {}, confidence: {}, reason: {}}}",
            self.kind, self.confidence, self.reason
        )
    }
}
