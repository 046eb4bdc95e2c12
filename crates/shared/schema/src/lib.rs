//! Alpha Schema
//!
//! Schema checker implementations for the [`alpha_ports::SchemaCheck`] port.
//!
//! ## Usage
//!
//! ```ignore
//! use alpha_schema::{FieldKind, FieldRule, FieldSchema, SchemaConfig};
//!
//! let config = SchemaConfig {
//!     fields: vec![
//!         FieldRule::required("symbol", FieldKind::String),
//!         FieldRule::optional("close", FieldKind::Number),
//!     ],
//!     allow_unknown_fields: true,
//! };
//! let schema = FieldSchema::new(config)?;
//! ```

mod config;
mod field_schema;

pub use config::{FieldKind, FieldRule, SchemaConfig, SchemaConfigError};
pub use field_schema::{FieldSchema, Violation};
