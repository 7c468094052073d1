//! Final routing decision

/// Decision metadata for observability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionMetadata {
    /// Stable tag identifying which strategy decided ("override", ...)
    pub source: String,

    /// Human-readable explanation of the decision
    pub reasoning: String,
}

/// Final routing decision after strategy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Selected model identifier (non-empty)
    pub model: String,

    /// Source and reasoning for the decision
    pub metadata: DecisionMetadata,
}

impl RoutingDecision {
    /// Create decision from model, source tag, and reasoning.
    ///
    /// `model` must be a non-empty identifier; strategies only decide once
    /// a model is determinately known.
    pub fn new(
        model: impl Into<String>,
        source: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        let model = model.into();
        debug_assert!(!model.is_empty(), "decision model must be non-empty");
        Self {
            model,
            metadata: DecisionMetadata {
                source: source.into(),
                reasoning: reasoning.into(),
            },
        }
    }
}
