//! Structured logging setup
//!
//! Builds tracing filter directives from [`LoggingConfig`] and installs a
//! global subscriber for embedding applications that do not bring their own.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level and
/// any component-specific log levels, in the format:
/// "base_level,prism::component1=level1,prism::component2=level2"
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",prism::{}={}", component, level));
        }
    }

    filter_str
}

/// Install a global fmt subscriber using the configured filter.
///
/// Respects `RUST_LOG` when set. Returns quietly if a subscriber is already
/// installed, so tests and embedders can call it unconditionally.
pub fn init(config: &LoggingConfig) {
    let directives = build_filter_directives(config);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn base_level_only() {
        let config = LoggingConfig {
            level: "info".to_string(),
            component_levels: None,
        };
        assert_eq!(build_filter_directives(&config), "info");
    }

    #[test]
    fn includes_component_levels() {
        let mut component_levels = HashMap::new();
        component_levels.insert("routing".to_string(), "debug".to_string());

        let config = LoggingConfig {
            level: "warn".to_string(),
            component_levels: Some(component_levels),
        };
        assert_eq!(build_filter_directives(&config), "warn,prism::routing=debug");
    }
}
