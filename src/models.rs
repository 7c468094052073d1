//! Model identifier constants and generation mapping

/// Sentinel meaning "no explicit preference, let routing decide".
pub const DEFAULT_GEMINI_MODEL_AUTO: &str = "auto";

/// Default model for auto-routed requests.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Flash-class model used in fallback mode and as an availability fallback.
pub const DEFAULT_GEMINI_FLASH_MODEL: &str = "gemini-2.5-flash";

/// Preview model identifier, eligible for generation substitution.
pub const PREVIEW_GEMINI_MODEL: &str = "gemini-3-pro-preview";

/// Next-generation counterpart of [`PREVIEW_GEMINI_MODEL`].
pub const PREVIEW_GEMINI_3_1_MODEL: &str = "gemini-3.1-pro-preview";

/// Returns true if `model` is the auto sentinel.
pub fn is_auto(model: &str) -> bool {
    model == DEFAULT_GEMINI_MODEL_AUTO
}

/// Maps a preview model identifier to its next-generation counterpart.
///
/// Returns `None` for models with no newer generation pairing.
pub fn next_generation_equivalent(model: &str) -> Option<&'static str> {
    match model {
        PREVIEW_GEMINI_MODEL => Some(PREVIEW_GEMINI_3_1_MODEL),
        _ => None,
    }
}
