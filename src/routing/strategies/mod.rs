//! Routing strategy implementations
//!
//! Standard chain order: FallbackStrategy → OverrideStrategy → DefaultStrategy.

pub mod default_model;
pub mod fallback;
pub mod override_strategy;

pub use default_model::DefaultStrategy;
pub use fallback::FallbackStrategy;
pub use override_strategy::OverrideStrategy;
