//! Errors reported by layout operations.
//!
//! Layout is a pure computation, so the only failure mode is input the
//! engine refuses to lay out: negative or non-finite geometry that would
//! otherwise turn into NaN positions further down.

/// Rejection of malformed layout input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// An item reported a negative or non-finite natural size.
    #[error("item {index} has invalid size {width}x{height}")]
    InvalidItemSize {
        /// Position of the item in the input sequence.
        index: usize,
        /// Reported width.
        width: f32,
        /// Reported height.
        height: f32,
    },
    /// Spacing between items and lines must be finite and non-negative.
    #[error("invalid minimum spacing {0}")]
    InvalidSpacing(f32),
    /// Maximum line width must be non-negative; infinity means unconstrained.
    #[error("invalid maximum line width {0}")]
    InvalidMaxWidth(f32),
    /// Placement origin must be finite.
    #[error("invalid origin ({x}, {y})")]
    InvalidOrigin {
        /// Origin x-coordinate.
        x: f32,
        /// Origin y-coordinate.
        y: f32,
    },
    /// The right edge of the placement bounds must not be NaN.
    #[error("invalid bounds right edge {0}")]
    InvalidBounds(f32),
}
