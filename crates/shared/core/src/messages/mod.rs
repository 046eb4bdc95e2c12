//! Message types flowing through the processor
//!
//! ```text
//! RawMessage ──validate──► ValidatedMessage ──compute──► EnrichedMessage
//! ```
//!
//! `ValidatedMessage` lives in the processor crate so that only the
//! validator can construct it.

mod enriched;
mod fields;
mod raw;

pub use enriched::EnrichedMessage;
pub use fields::{MessageFields, SYMBOL_KEY, TIMESTAMP_KEY};
pub use raw::RawMessage;
