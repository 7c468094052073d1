//! FallbackStrategy - routes degraded sessions to the flash model

use async_trait::async_trait;

use crate::client::LlmClient;
use crate::config::ModelConfig;
use crate::models::DEFAULT_GEMINI_FLASH_MODEL;
use crate::routing::context::RoutingContext;
use crate::routing::decision::RoutingDecision;
use crate::routing::strategy::RoutingStrategy;

/// Source tag on decisions produced by this strategy.
pub const FALLBACK_SOURCE: &str = "fallback";

/// FallbackStrategy pins a degraded session to the flash-class model.
///
/// Runs before the override strategy so a session in fallback mode is never
/// routed to a model it can no longer use, even when an override is set.
/// Declines whenever fallback mode is off.
#[derive(Debug, Default)]
pub struct FallbackStrategy;

impl FallbackStrategy {
    /// Create a new FallbackStrategy
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoutingStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "FallbackStrategy"
    }

    async fn route(
        &self,
        _context: &RoutingContext,
        config: &dyn ModelConfig,
        _client: &dyn LlmClient,
    ) -> anyhow::Result<Option<RoutingDecision>> {
        if !config.fallback_mode() {
            return Ok(None);
        }

        tracing::debug!(
            model = DEFAULT_GEMINI_FLASH_MODEL,
            "Fallback mode active, pinning flash model"
        );
        Ok(Some(RoutingDecision::new(
            DEFAULT_GEMINI_FLASH_MODEL,
            FALLBACK_SOURCE,
            format!(
                "Session is in fallback mode, routing to {}",
                DEFAULT_GEMINI_FLASH_MODEL
            ),
        )))
    }
}
