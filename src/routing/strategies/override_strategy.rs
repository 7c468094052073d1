//! OverrideStrategy - enforces explicit model selection
//!
//! Enforces an explicit, non-negotiable model selection when one exists,
//! taking absolute precedence over any adaptive routing that later
//! strategies might apply.

use async_trait::async_trait;

use crate::client::LlmClient;
use crate::config::ModelConfig;
use crate::models::{is_auto, next_generation_equivalent};
use crate::routing::context::RoutingContext;
use crate::routing::decision::RoutingDecision;
use crate::routing::strategy::RoutingStrategy;

/// Source tag on decisions produced by this strategy.
pub const OVERRIDE_SOURCE: &str = "override";

/// OverrideStrategy forces a specific model when configuration demands it.
///
/// # Pipeline Position
/// FallbackStrategy → **OverrideStrategy** → DefaultStrategy
///
/// # Behavior
/// 1. Candidate = `context.requested_model` if present, else `config.model()`
/// 2. Candidate is the auto sentinel → decline, later strategies decide
/// 3. Otherwise an override is in force; if the candidate is a preview model
///    and the newer generation has launched, substitute the next-generation
///    identifier unless exact-model preservation was requested
/// 4. Decide with source "override" and reasoning naming the literal model
///
/// Purely a function of its inputs; the client is part of the uniform
/// signature but unused here.
#[derive(Debug, Default)]
pub struct OverrideStrategy;

impl OverrideStrategy {
    /// Create a new OverrideStrategy
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoutingStrategy for OverrideStrategy {
    fn name(&self) -> &'static str {
        "OverrideStrategy"
    }

    async fn route(
        &self,
        context: &RoutingContext,
        config: &dyn ModelConfig,
        _client: &dyn LlmClient,
    ) -> anyhow::Result<Option<RoutingDecision>> {
        let candidate = match &context.requested_model {
            Some(requested) => requested.clone(),
            None => config.model(),
        };

        if is_auto(&candidate) {
            return Ok(None);
        }

        if let Some(next_gen) = next_generation_equivalent(&candidate) {
            if config.gemini_31_launched() {
                if config.preserve_exact_model() {
                    tracing::debug!(
                        model = %candidate,
                        "Override: preserving exact model despite newer generation"
                    );
                    return Ok(Some(RoutingDecision::new(
                        candidate.clone(),
                        OVERRIDE_SOURCE,
                        format!(
                            "Routing bypassed by forced model directive: {} \
                             (preserved due to explicit CLI model flag)",
                            candidate
                        ),
                    )));
                }

                tracing::debug!(
                    from = %candidate,
                    to = %next_gen,
                    "Override: resolving preview model to launched generation"
                );
                return Ok(Some(RoutingDecision::new(
                    next_gen,
                    OVERRIDE_SOURCE,
                    format!(
                        "Routing bypassed by forced model directive: {} \
                         (automatically resolved from {})",
                        next_gen, candidate
                    ),
                )));
            }
        }

        Ok(Some(RoutingDecision::new(
            candidate.clone(),
            OVERRIDE_SOURCE,
            format!("Routing bypassed by forced model directive: {}", candidate),
        )))
    }
}
