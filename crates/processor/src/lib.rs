//! Alpha Processor
//!
//! Placeholder message-processing step for the backtest pipeline:
//! - **Validator**: checks raw messages against a schema
//! - **Signal Computer**: attaches a fixed HOLD signal to validated messages
//! - **Message Processor**: chains the two, one message or a batch at a time
//!
//! ## Architecture
//!
//! ```text
//!   RawMessage
//!       │
//!  ┌────▼──────┐  InvalidFormat
//!  │ Validator ├──────────────► caller (skip / dead-letter / retry)
//!  └────┬──────┘
//!       │ ValidatedMessage
//!  ┌────▼────────────┐
//!  │ Signal Computer │  + {signal, confidence, reason}
//!  └────┬────────────┘
//!       │ EnrichedMessage
//!       ▼
//!     caller
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use alpha_processor::{MessageProcessor, ProcessorConfig, logging};
//!
//! let config = ProcessorConfig::from_env()?;
//! logging::setup_logger(&config.log_filter);
//!
//! let processor = MessageProcessor::from_config(&config)?;
//! let enriched = processor.process_json(r#"{"symbol":"AAPL","timestamp":"2024-01-01T00:00:00Z"}"#)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod signal;
pub mod validator;

// Re-export main types
pub use config::ProcessorConfig;
pub use error::{ProcessorError, Result};
pub use pipeline::{BatchOutcome, MessageProcessor};
pub use signal::{SignalComputer, compute_signal};
pub use validator::{ValidatedMessage, Validator, validate_input_message};

// Re-export domain types for convenience
pub use alpha_core::{AlphaSignal, EnrichedMessage, MessageFields, RawMessage, SignalKind};
pub use alpha_ports::{SchemaCheck, ValidationError};
pub use alpha_schema::{FieldKind, FieldRule, FieldSchema, SchemaConfig};
