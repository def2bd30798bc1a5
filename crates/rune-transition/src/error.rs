//! Error types for transition construction.

use thiserror::Error;

/// Result type for transition operations.
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Errors raised while validating transition parameters.
///
/// Geometry and style values read from elements are never validated; only
/// caller-supplied configuration is checked, once, at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// A delay or duration was negative or not finite.
    #[error("{field} must be a non-negative finite number of milliseconds, got {value}")]
    NegativeTiming { field: &'static str, value: f64 },

    /// An opacity parameter fell outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    OpacityOutOfRange { field: &'static str, value: f64 },

    /// `draw` speed must be strictly positive.
    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(f64),

    /// `slide` axis was neither `x` nor `y`.
    #[error("invalid slide axis {0:?}, expected \"x\" or \"y\"")]
    InvalidAxis(String),

    /// A CSS length string could not be parsed.
    #[error("invalid CSS length: {0:?}")]
    InvalidLength(String),

    /// A CSS transform list could not be parsed.
    #[error("invalid CSS transform: {0:?}")]
    InvalidTransform(String),

    /// An easing name is not part of the catalogue.
    #[error("unknown easing function: {0:?}")]
    UnknownEasing(String),

    /// An easing definition was recognised but its arguments are invalid.
    #[error("invalid easing definition: {0}")]
    InvalidEasing(String),

    /// `draw` was asked to animate an element without a measurable path.
    #[error("element has no measurable path length")]
    MissingPathLength,
}
