//! Error types for layout requests.
//!
//! Only caller misuse is reported here. Degenerate geometry (an obstacle wider
//! than the text block) and misbehaving measurers are absorbed by the breaker.

use thiserror::Error;

/// Errors returned when a layout request is malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The effective line height is zero, negative, or not finite.
    #[error("line height must be a positive finite number, got {0}")]
    InvalidLineHeight(f32),

    /// The available render width is negative or NaN.
    #[error("available width must be a non-negative number, got {0}")]
    InvalidWidth(f32),

    /// A height bound passed to a definite-height pass is negative or NaN.
    #[error("known height must be a non-negative number, got {0}")]
    InvalidHeight(f32),

    /// `max_lines` was set to zero.
    #[error("max lines must be at least 1")]
    InvalidMaxLines,

    /// An obstacle has a negative or non-finite dimension.
    #[error("obstacle {index} has an invalid size {width}x{height}")]
    InvalidObstacle {
        /// Position of the obstacle in insertion order.
        index: usize,
        width: f32,
        height: f32,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
