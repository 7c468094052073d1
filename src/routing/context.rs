//! Per-request routing context

/// Immutable per-request facts observed by every strategy.
///
/// Built once when the request arrives and never mutated mid-evaluation, so
/// all strategies in a chain see the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct RoutingContext {
    /// Model explicitly requested at the call site. Takes precedence over
    /// the configured model.
    pub requested_model: Option<String>,
}

impl RoutingContext {
    /// Create an empty context (no call-site directives)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with an explicitly requested model
    pub fn with_requested_model(model: impl Into<String>) -> Self {
        Self {
            requested_model: Some(model.into()),
        }
    }
}
