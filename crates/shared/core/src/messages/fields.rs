use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::values::{FieldMap, Timestamp};

/// Well-known key for the instrument symbol
pub const SYMBOL_KEY: &str = "symbol";
/// Well-known key for the message timestamp
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Read access shared by every message stage
///
/// All other keys pass through untouched; only `symbol` and `timestamp`
/// get typed accessors.
pub trait MessageFields {
    /// Underlying field map
    fn fields(&self) -> &FieldMap;

    fn get(&self, key: &str) -> Option<&Value> {
        self.fields().get(key)
    }

    fn len(&self) -> usize {
        self.fields().len()
    }

    fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// `symbol` if present and a string
    fn symbol(&self) -> Option<&str> {
        self.get(SYMBOL_KEY).and_then(Value::as_str)
    }

    /// `timestamp` if present and a string
    fn timestamp(&self) -> Option<&str> {
        self.get(TIMESTAMP_KEY).and_then(Value::as_str)
    }

    /// `timestamp` parsed as RFC 3339
    fn timestamp_utc(&self) -> Option<Timestamp> {
        self.timestamp()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// Render a field for log output, falling back to `default` when absent.
    /// Strings are shown as-is, other values as JSON text.
    fn field_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(default),
        }
    }
}
