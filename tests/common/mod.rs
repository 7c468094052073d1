//! Shared test doubles for routing integration tests

use async_trait::async_trait;
use prism::client::LlmClient;
use prism::config::ModelConfig;

/// Configurable in-memory config double
pub struct FakeConfig {
    pub model: String,
    pub preserve_exact_model: bool,
    pub gemini_31_launched: bool,
    pub fallback_mode: bool,
}

impl FakeConfig {
    pub fn auto() -> Self {
        Self::with_model("auto")
    }

    pub fn with_model(model: &str) -> Self {
        Self {
            model: model.to_string(),
            preserve_exact_model: false,
            gemini_31_launched: false,
            fallback_mode: false,
        }
    }
}

impl ModelConfig for FakeConfig {
    fn model(&self) -> String {
        self.model.clone()
    }

    fn preserve_exact_model(&self) -> bool {
        self.preserve_exact_model
    }

    fn gemini_31_launched(&self) -> bool {
        self.gemini_31_launched
    }

    fn fallback_mode(&self) -> bool {
        self.fallback_mode
    }
}

/// Client double with canned availability answers
pub struct FakeClient {
    pub available: bool,
}

impl FakeClient {
    pub fn all_available() -> Self {
        Self { available: true }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn is_model_available(&self, _model: &str) -> anyhow::Result<bool> {
        Ok(self.available)
    }
}

/// Client double whose availability query always fails
pub struct BrokenClient;

#[async_trait]
impl LlmClient for BrokenClient {
    async fn is_model_available(&self, _model: &str) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("availability endpoint unreachable"))
    }
}
