use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Untyped message body: string keys to arbitrary JSON values
pub type FieldMap = Map<String, Value>;
