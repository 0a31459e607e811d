//! Error type shared by the storefront state machines.

/// Errors raised by storefront state transitions and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorefrontError {
    #[error("slide deck must contain at least one slide")]
    EmptyDeck,

    #[error("slide {index} is out of range for a deck of {len}")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("failed to schedule auto-advance timer: {0}")]
    Timer(String),

    #[error("invalid site config: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StorefrontError>;
