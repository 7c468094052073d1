//! DefaultStrategy - terminal strategy for auto-routed requests

use async_trait::async_trait;

use crate::client::LlmClient;
use crate::config::ModelConfig;
use crate::models::{DEFAULT_GEMINI_FLASH_MODEL, DEFAULT_GEMINI_MODEL};
use crate::routing::context::RoutingContext;
use crate::routing::decision::RoutingDecision;
use crate::routing::strategy::RoutingStrategy;

/// Source tag on decisions produced by this strategy.
pub const DEFAULT_SOURCE: &str = "default";

/// DefaultStrategy always decides; it terminates the standard chain.
///
/// Picks the default model, consulting the client for live availability
/// first. When the default model is unavailable the flash model is used
/// instead, so an auto-routed request still gets dispatched somewhere.
/// Availability query failures propagate to the caller.
#[derive(Debug, Default)]
pub struct DefaultStrategy;

impl DefaultStrategy {
    /// Create a new DefaultStrategy
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoutingStrategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "DefaultStrategy"
    }

    async fn route(
        &self,
        _context: &RoutingContext,
        _config: &dyn ModelConfig,
        client: &dyn LlmClient,
    ) -> anyhow::Result<Option<RoutingDecision>> {
        if client.is_model_available(DEFAULT_GEMINI_MODEL).await? {
            return Ok(Some(RoutingDecision::new(
                DEFAULT_GEMINI_MODEL,
                DEFAULT_SOURCE,
                format!("No routing preference, using {}", DEFAULT_GEMINI_MODEL),
            )));
        }

        tracing::debug!(
            unavailable = DEFAULT_GEMINI_MODEL,
            using = DEFAULT_GEMINI_FLASH_MODEL,
            "Default model unavailable, using flash"
        );
        Ok(Some(RoutingDecision::new(
            DEFAULT_GEMINI_FLASH_MODEL,
            DEFAULT_SOURCE,
            format!(
                "Default model {} unavailable, using {}",
                DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_FLASH_MODEL
            ),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crate::config::RouterSettings;

    struct AvailabilityClient {
        available: bool,
    }

    #[async_trait]
    impl LlmClient for AvailabilityClient {
        async fn is_model_available(&self, _model: &str) -> anyhow::Result<bool> {
            Ok(self.available)
        }
    }

    struct FailingClient;

    #[async_trait]
    impl LlmClient for FailingClient {
        async fn is_model_available(&self, _model: &str) -> anyhow::Result<bool> {
            Err(anyhow!("availability endpoint unreachable"))
        }
    }

    #[tokio::test]
    async fn uses_default_model_when_available() {
        let client = AvailabilityClient { available: true };

        let decision = DefaultStrategy::new()
            .route(&RoutingContext::new(), &RouterSettings::default(), &client)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(decision.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(decision.metadata.source, "default");
    }

    #[tokio::test]
    async fn falls_back_to_flash_when_default_unavailable() {
        let client = AvailabilityClient { available: false };

        let decision = DefaultStrategy::new()
            .route(&RoutingContext::new(), &RouterSettings::default(), &client)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(decision.model, DEFAULT_GEMINI_FLASH_MODEL);
    }

    #[tokio::test]
    async fn propagates_client_failure() {
        let result = DefaultStrategy::new()
            .route(
                &RoutingContext::new(),
                &RouterSettings::default(),
                &FailingClient,
            )
            .await;
        assert!(result.is_err());
    }
}
