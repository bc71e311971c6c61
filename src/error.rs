//! Error types for palette extraction.
//!
//! Configuration problems are raised before any scanning work begins.
//! An all-ignored image is not an error: the engine returns an empty
//! palette with a warning attached instead.

use thiserror::Error;

/// Error type for extraction failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Row scan of a square image needs the caller to pick an axis.
    #[error("square image with row scan mode requires an explicit orientation")]
    AmbiguousOrientation,
    /// `min_percentage` must be a finite value in [0, 100].
    #[error("minimum pixel percentage {0} is outside the valid range 0-100")]
    InvalidPercentage(f64),
    /// Ignore threshold must be finite and non-negative.
    #[error("ignore threshold {0} must be a non-negative finite number")]
    InvalidThreshold(f64),
    /// The reduction search is cubic in the candidate count; refuse
    /// workloads that would make that cost unacceptable.
    #[error(
        "{candidates} palette candidates exceed the reduction limit of {limit}; \
         raise min_percentage to thin the candidate set first"
    )]
    PaletteTooLarge { candidates: usize, limit: usize },
}
