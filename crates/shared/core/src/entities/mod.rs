mod alpha_signal;
mod signal_kind;

pub use alpha_signal::{AlphaSignal, CONFIDENCE_KEY, PLACEHOLDER_REASON, REASON_KEY, SIGNAL_KEY};
pub use signal_kind::SignalKind;
