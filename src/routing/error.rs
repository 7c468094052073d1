//! Error types for routing failures

use thiserror::Error;

/// Errors that can occur during model routing
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Every strategy in the chain declined
    #[error("No route resolved; strategies tried: {tried:?}")]
    NoRouteResolved { tried: Vec<String> },

    /// A strategy failed while evaluating; surfaced unmodified rather than
    /// falling through to later strategies
    #[error("Strategy '{strategy}' failed")]
    StrategyFailed {
        strategy: String,
        #[source]
        source: anyhow::Error,
    },
}
