//! Integration test: validate → compute flow
//!
//! Tests the complete flow:
//! 1. Producer message is checked against the schema
//! 2. Accepted messages pass through unchanged
//! 3. Signal computer attaches the placeholder HOLD signal
//! 4. Rejected messages stop at the validator with InvalidFormat

use std::sync::Arc;
use std::thread;

use alpha_processor::{
    AlphaSignal, FieldSchema, MessageFields, MessageProcessor, ProcessorConfig, RawMessage,
    SignalComputer, SignalKind, ValidationError, Validator, compute_signal,
    validate_input_message,
};
use rust_decimal_macros::dec;
use serde_json::json;

fn accept_all(_: &RawMessage) -> bool {
    true
}

fn reject_all(_: &RawMessage) -> bool {
    false
}

fn aapl() -> RawMessage {
    RawMessage::from_json_str(r#"{"symbol":"AAPL","timestamp":"2024-01-01T00:00:00Z"}"#).unwrap()
}

#[test]
fn test_end_to_end_enrichment() {
    let _ = env_logger::try_init();

    let raw = aapl();
    let validated = validate_input_message(raw.clone(), &accept_all).unwrap();
    assert_eq!(validated.fields(), raw.fields());

    let enriched = compute_signal(validated);

    assert_eq!(
        serde_json::to_value(&enriched).unwrap(),
        json!({
            "symbol": "AAPL",
            "timestamp": "2024-01-01T00:00:00Z",
            "signal": "HOLD",
            "confidence": 0.5,
            "reason": "Default placeholder signal logic"
        })
    );
}

#[test]
fn test_end_to_end_rejection() {
    let _ = env_logger::try_init();

    let result = validate_input_message(RawMessage::default(), &reject_all);

    assert_eq!(result.unwrap_err(), ValidationError::InvalidFormat);
}

#[test]
fn test_default_schema_end_to_end() {
    let _ = env_logger::try_init();
    let processor = MessageProcessor::from_config(&ProcessorConfig::default()).unwrap();

    let enriched = processor.process(aapl()).unwrap();
    assert_eq!(enriched.signal(), Some(SignalKind::Hold));
    assert_eq!(enriched.timestamp(), Some("2024-01-01T00:00:00Z"));

    assert_eq!(
        processor.process(RawMessage::default()).unwrap_err(),
        ValidationError::InvalidFormat
    );
}

#[test]
fn test_signal_is_fixed_point_after_one_pass() {
    let _ = env_logger::try_init();
    let processor = MessageProcessor::with_schema(accept_all);

    let once = processor
        .process(aapl().with_field("signal", "SELL").with_field("volume", 900))
        .unwrap();
    let twice = processor.process(RawMessage::from(once.clone())).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 6);
}

#[test]
fn test_every_input_key_survives() {
    let _ = env_logger::try_init();
    let raw = aapl()
        .with_field("ohlc", json!({"open": 1.0, "close": 2.0}))
        .with_field("tags", json!(["earnings"]))
        .with_field("halted", false)
        .with_field("note", json!(null));

    let enriched = MessageProcessor::with_schema(accept_all)
        .process(raw.clone())
        .unwrap();

    for (key, value) in raw.fields() {
        assert_eq!(enriched.get(key), Some(value), "key {} changed", key);
    }
    assert_eq!(enriched.len(), raw.len() + 3);
}

#[test]
fn test_placeholder_matches_enrichment() {
    let signal = AlphaSignal::placeholder();
    assert_eq!(signal.confidence, dec!(0.5));

    let enriched = compute_signal(validate_input_message(aapl(), &accept_all).unwrap());
    assert_eq!(enriched.reason(), Some(signal.reason.as_str()));
    assert_eq!(enriched.signal(), Some(signal.kind));
}

#[test]
fn test_named_loggers_do_not_change_output() {
    let _ = env_logger::try_init();
    let processor = MessageProcessor::new(
        Validator::new(FieldSchema::default()).with_logger("backtest::validator"),
        SignalComputer::new().with_logger("backtest::signal"),
    );

    let custom = processor.process(aapl()).unwrap();
    let default = MessageProcessor::with_schema(FieldSchema::default())
        .process(aapl())
        .unwrap();

    assert_eq!(custom, default);
}

#[test]
fn test_concurrent_processing() {
    let _ = env_logger::try_init();
    let processor = Arc::new(MessageProcessor::with_schema(FieldSchema::default()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let processor = Arc::clone(&processor);
            thread::spawn(move || {
                let messages = (0..50).map(|j| {
                    if j % 5 == 0 {
                        RawMessage::default().with_field("symbol", format!("SYM{}", i))
                    } else {
                        aapl().with_field("symbol", format!("SYM{}", i))
                    }
                });
                processor.process_batch(messages)
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.join().unwrap();
        assert_eq!(outcome.total(), 50);
        assert_eq!(outcome.rejected, 10);
        assert!(
            outcome
                .enriched
                .iter()
                .all(|m| m.signal() == Some(SignalKind::Hold))
        );
    }
}
