//! Alpha Ports
//!
//! Port definitions (traits) for the backtest alpha processor.
//! These define the boundaries between the processing core and the
//! collaborators it consumes.

mod error;
mod schema;

pub use error::{ValidationError, ValidationResult};
pub use schema::SchemaCheck;
