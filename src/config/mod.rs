//! Configuration module for Prism
//!
//! Provides the read-only configuration view consumed by routing strategies
//! and a TOML-backed settings loader for embedding applications.
//!
//! # Configuration Precedence
//!
//! 1. Environment variables (`PRISM_*`)
//! 2. Configuration file (TOML)
//! 3. Default values
//!
//! # Example
//!
//! ```rust
//! use prism::config::{ModelConfig, RouterSettings};
//!
//! // Load defaults
//! let settings = RouterSettings::default();
//! assert_eq!(settings.model(), "auto");
//!
//! // Parse from TOML
//! let toml = r#"
//! model = "gemini-2.5-pro"
//! preserve_exact_model = true
//! "#;
//! let settings: RouterSettings = toml::from_str(toml).unwrap();
//! assert_eq!(settings.model(), "gemini-2.5-pro");
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::LoggingConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::DEFAULT_GEMINI_MODEL_AUTO;

/// Read-only configuration view consumed by routing strategies.
///
/// All accessors are synchronous, side-effect-free reads. The view is a
/// snapshot: it must not change for the duration of one routing request.
pub trait ModelConfig: Send + Sync {
    /// The effective configured model: the auto sentinel or a concrete id.
    fn model(&self) -> String;

    /// When true, generation substitution is disabled for this request,
    /// typically because an explicit CLI model flag was given.
    fn preserve_exact_model(&self) -> bool {
        false
    }

    /// When true, the newer model generation has launched and is eligible
    /// for substitution.
    fn gemini_31_launched(&self) -> bool {
        false
    }

    /// When true, the session has dropped into fallback mode and should be
    /// routed to the flash-class model.
    fn fallback_mode(&self) -> bool {
        false
    }
}

/// Concrete settings struct for embedding applications.
///
/// Aggregates the routing knobs and the logging section. Field defaults
/// match an unconfigured session: auto model, no overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Effective model ("auto" or a concrete identifier)
    pub model: String,

    /// Disable generation substitution (explicit CLI model flag)
    pub preserve_exact_model: bool,

    /// Newer model generation has launched
    pub gemini_31_launched: bool,

    /// Session is in fallback mode
    pub fallback_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL_AUTO.to_string(),
            preserve_exact_model: false,
            gemini_31_launched: false,
            fallback_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl RouterSettings {
    /// Load settings from a TOML file
    ///
    /// If path is None, returns default settings.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports PRISM_* environment variables for common settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("PRISM_MODEL") {
            self.model = model;
        }
        if let Ok(level) = std::env::var("PRISM_LOG_LEVEL") {
            self.logging.level = level;
        }
        self
    }
}

impl ModelConfig for RouterSettings {
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
