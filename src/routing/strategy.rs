//! Core routing strategy trait

use async_trait::async_trait;

use crate::client::LlmClient;
use crate::config::ModelConfig;
use crate::routing::context::RoutingContext;
use crate::routing::decision::RoutingDecision;

/// Pluggable routing rule: decide the target model or defer.
///
/// # Contract
///
/// Strategies must:
/// - Be Send + Sync (thread-safe)
/// - Express "no opinion" as `Ok(None)`, never as an error
/// - Propagate accessor and client failures unmodified via `Err`
/// - Not mutate context or config (both are read-only snapshots)
///
/// Strategies may suspend (e.g. to consult the client) before deciding; the
/// router awaits each strategy to completion before moving to the next.
#[async_trait]
pub trait RoutingStrategy: Send + Sync {
    /// Name for logging and the exhausted-routing error
    fn name(&self) -> &'static str;

    /// Evaluate this strategy against one request.
    ///
    /// Returns `Ok(Some(decision))` when the model is determinately known
    /// without further strategy evaluation, `Ok(None)` to defer.
    ///
    /// # Errors
    ///
    /// Returns Err only when an upstream accessor or the client fails;
    /// routing stops rather than masking the failure.
    async fn route(
        &self,
        context: &RoutingContext,
        config: &dyn ModelConfig,
        client: &dyn LlmClient,
    ) -> anyhow::Result<Option<RoutingDecision>>;
}
