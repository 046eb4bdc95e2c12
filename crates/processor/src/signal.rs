//! Signal Computer - attaches an alpha signal to validated messages
//!
//! Stand-in for a real strategy: every message gets the same HOLD signal
//! at 0.5 confidence, whatever its content.

use alpha_core::{AlphaSignal, EnrichedMessage, MessageFields, SYMBOL_KEY, TIMESTAMP_KEY};
use log::{debug, info};

use crate::validator::ValidatedMessage;

/// Default logger target for the signal computer
pub const SIGNAL_LOGGER: &str = "alpha_processor::signal";

/// Shown in logs when a message has no `symbol`
pub const DEFAULT_SYMBOL: &str = "UNKNOWN";
/// Shown in logs when a message has no `timestamp`
pub const DEFAULT_TIMESTAMP: &str = "N/A";

/// Stateless signal computer
#[derive(Debug, Clone)]
pub struct SignalComputer {
    logger: String,
}

impl SignalComputer {
    pub fn new() -> Self {
        Self {
            logger: SIGNAL_LOGGER.to_string(),
        }
    }

    /// Builder: Log under a different target
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    /// Merge the placeholder signal into `message`. Never fails.
    pub fn compute_signal(&self, message: ValidatedMessage) -> EnrichedMessage {
        compute_with(message, &self.logger)
    }
}

impl Default for SignalComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the signal for `message` with the default logger target
pub fn compute_signal(message: ValidatedMessage) -> EnrichedMessage {
    compute_with(message, SIGNAL_LOGGER)
}

fn compute_with(message: ValidatedMessage, logger: &str) -> EnrichedMessage {
    let symbol = message.field_or(SYMBOL_KEY, DEFAULT_SYMBOL).into_owned();
    let timestamp = message.field_or(TIMESTAMP_KEY, DEFAULT_TIMESTAMP);
    info!(target: logger, "Computing signal for {} @ {}", symbol, timestamp);

    let signal = AlphaSignal::placeholder();

    debug!(target: logger, "Computed signal for {}: {}", symbol, signal);
    EnrichedMessage::enrich(message.into_fields(), &signal)
}
