//! Narrow interface to the LLM client
//!
//! The client is an external collaborator. Strategies receive it through the
//! uniform routing signature; most ignore it, availability-aware strategies
//! query it before deciding.

use async_trait::async_trait;

/// Opaque handle to the backend LLM client.
///
/// # Contract
///
/// Implementations must be Send + Sync. Availability checks are advisory:
/// a `true` answer does not guarantee the subsequent request succeeds, it
/// only steers routing toward models believed to be live.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Check whether `model` is currently available for dispatch.
    ///
    /// # Errors
    ///
    /// Returns Err if the availability query itself fails; routing surfaces
    /// the failure rather than guessing.
    async fn is_model_available(&self, model: &str) -> anyhow::Result<bool>;
}
