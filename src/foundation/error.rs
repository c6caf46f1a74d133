/// Convenience result type used across the engine.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Debounce cases (a command arriving mid-transition, advancing past the last
/// slide, retreating before the first) are silent no-ops by design and never
/// surface here.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// A slide index outside `[0, count)`. Normalized input never produces
    /// one, so this indicates a programming defect in the caller.
    #[error("slide index {index} out of range (deck has {count} slides)")]
    OutOfRange { index: usize, count: usize },

    /// Invalid manifest or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or decoding a deck manifest or playback script.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Manifest`] value.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
