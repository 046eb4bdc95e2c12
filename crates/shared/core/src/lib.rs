//! Alpha Core Domain
//!
//! Pure message and signal types for the backtest alpha processor.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod messages;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AlphaSignal, CONFIDENCE_KEY, PLACEHOLDER_REASON, REASON_KEY, SIGNAL_KEY, SignalKind,
};
pub use messages::{EnrichedMessage, MessageFields, RawMessage, SYMBOL_KEY, TIMESTAMP_KEY};
pub use values::{FieldMap, Timestamp};
