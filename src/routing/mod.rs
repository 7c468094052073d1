//! Model routing pipeline
//!
//! This module implements the routing decision pipeline: a chain of
//! pluggable strategies evaluated in priority order. Each strategy either
//! produces a final [`RoutingDecision`] or declines and defers to the next;
//! the first non-declining strategy wins.

pub mod context;
pub mod decision;
pub mod error;
pub mod strategies;
pub mod strategy;

pub use context::RoutingContext;
pub use decision::{DecisionMetadata, RoutingDecision};
pub use error::RoutingError;
pub use strategy::RoutingStrategy;

use std::sync::Arc;

use crate::client::LlmClient;
use crate::config::ModelConfig;
use strategies::{DefaultStrategy, FallbackStrategy, OverrideStrategy};

/// Router evaluates strategies sequentially and returns the first decision.
///
/// Strategies always observe the same context and config snapshot for the
/// duration of one routing request. Evaluation is strictly sequential; the
/// router awaits each strategy before asking the next, so cancelling the
/// returned future stops evaluation at the next suspension point with no
/// partial decision.
pub struct Router {
    strategies: Vec<Arc<dyn RoutingStrategy>>,
}

impl Router {
    /// Create a router with the given strategies, evaluated in order
    pub fn new(strategies: Vec<Arc<dyn RoutingStrategy>>) -> Self {
        Self { strategies }
    }

    /// The standard chain: Fallback → Override → Default.
    ///
    /// The terminal DefaultStrategy always decides, so this chain never
    /// exhausts.
    pub fn standard() -> Self {
        RouterBuilder::new()
            .add(Arc::new(FallbackStrategy::new()))
            .add(Arc::new(OverrideStrategy::new()))
            .add(Arc::new(DefaultStrategy::new()))
            .build()
    }

    /// Strategy names in evaluation order, for logging and diagnostics
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Route one request through the strategy chain.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::StrategyFailed`] if a strategy fails; the
    /// failure surfaces immediately rather than falling through to later
    /// strategies, so an operator's explicit intent is never masked.
    /// Returns [`RoutingError::NoRouteResolved`] if every strategy declines.
    pub async fn route(
        &self,
        context: &RoutingContext,
        config: &dyn ModelConfig,
        client: &dyn LlmClient,
    ) -> Result<RoutingDecision, RoutingError> {
        let mut tried = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            match strategy.route(context, config, client).await {
                Ok(Some(decision)) => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        model = %decision.model,
                        source = %decision.metadata.source,
                        "Routing decision"
                    );
                    return Ok(decision);
                }
                Ok(None) => {
                    tracing::trace!(strategy = strategy.name(), "Strategy declined");
                    tried.push(strategy.name().to_string());
                }
                Err(err) => {
                    tracing::error!(
                        strategy = strategy.name(),
                        error = %err,
                        "Strategy failed, stopping pipeline"
                    );
                    return Err(RoutingError::StrategyFailed {
                        strategy: strategy.name().to_string(),
                        source: err,
                    });
                }
            }
        }

        Err(RoutingError::NoRouteResolved { tried })
    }
}

/// Builder for constructing routing chains
pub struct RouterBuilder {
    strategies: Vec<Arc<dyn RoutingStrategy>>,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a strategy to the chain
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, strategy: Arc<dyn RoutingStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Build the router
    pub fn build(self) -> Router {
        Router::new(self.strategies)
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
