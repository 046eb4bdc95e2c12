use alpha_core::RawMessage;

/// Port for message schema checking
///
/// The schema itself is owned by the implementation:
/// - Field-rule schemas loaded from configuration
/// - Closures for tests or ad-hoc pipelines
pub trait SchemaCheck: Send + Sync {
    /// Returns true if the message conforms to the schema
    fn check(&self, message: &RawMessage) -> bool;

    /// Get the schema's name/identifier for debugging
    fn name(&self) -> &str {
        "SchemaCheck"
    }
}

impl<F> SchemaCheck for F
where
    F: Fn(&RawMessage) -> bool + Send + Sync,
{
    fn check(&self, message: &RawMessage) -> bool {
        self(message)
    }
}
