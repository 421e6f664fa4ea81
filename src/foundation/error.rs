/// Result alias used across the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Errors produced by scrollmorph.
///
/// Configuration is checked when curves, scroll windows, trackers and scenes are built.
/// Sampling at a single progress never errors; out-of-range inputs are clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Misconfigured curve, channel, scroll window or tracker.
    #[error("config error: {0}")]
    Config(String),

    /// A runtime argument is out of range, such as a zero step count for a sampling table.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, typically IO while loading a scene.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MorphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
