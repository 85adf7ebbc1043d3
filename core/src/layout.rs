//! Layout protocol and geometry types.
//!
//! # Logical Pixels (Points)
//!
//! All values are **logical pixels** (points). Hosts convert to physical
//! pixels; the engine never sees screen density.
//!
//! # Two-Phase Layout
//!
//! A host first asks a container how large it wants to be for a
//! [`ProposalSize`], then asks it to place its children inside the bounds it
//! finally granted. The [`Layout`] trait mirrors those two phases and the
//! [`SubView`] trait is the host-side proxy the container queries for each
//! child's natural size.

use core::fmt::Debug;

use alloc::vec::Vec;

// ============================================================================
// SubView Trait - Child View Proxy
// ============================================================================

/// A proxy for querying a child's size during layout.
///
/// Implemented by the host. The layout engine only ever asks
/// `size_that_fits(ProposalSize::UNSPECIFIED)`, i.e. the child's natural,
/// unconstrained size.
pub trait SubView {
    /// Query the child's size for a given proposal.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;
}

impl<F> SubView for F
where
    F: Fn(ProposalSize) -> Size,
{
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self(proposal)
    }
}

impl SubView for Size {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        *self
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): how big this
///    container should be given a proposal.
/// 2. **Placement** ([`place`](Self::place)): where each child goes inside the
///    final bounds.
///
/// Both methods must be pure: the same proposal and children yield the same
/// answer, so that the size reported in phase one matches what phase two
/// draws.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds, returning one rect per child
    /// in input order.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Creates a rectangle of `size` whose center sits at `center`.
    #[must_use]
    pub const fn from_center(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(
                center.x - size.width / 2.0,
                center.y - size.height / 2.0,
            ),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are finite and not negative.
    #[must_use]
    pub const fn is_finite_non_negative(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(0.0)` - "Tell me your minimum size"
/// - `Some(f32::INFINITY)` - "Tell me your maximum size"
/// - `Some(value)` - "I suggest you use this size"
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Returns the width or a default value if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(rect.x(), 10.0);
        assert_eq!(rect.y(), 20.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.mid_x(), 60.0);
        assert_eq!(rect.mid_y(), 45.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center(Point::new(25.0, 10.0), Size::new(50.0, 20.0));

        assert_eq!(rect.origin(), Point::zero());
        assert_eq!(rect.center(), Point::new(25.0, 10.0));
        assert_eq!(*rect.size(), Size::new(50.0, 20.0));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(0.0, 0.0).is_finite_non_negative());
        assert!(Size::new(12.5, 3.0).is_finite_non_negative());
        assert!(!Size::new(-1.0, 3.0).is_finite_non_negative());
        assert!(!Size::new(1.0, f32::NAN).is_finite_non_negative());
        assert!(!Size::new(f32::INFINITY, 1.0).is_finite_non_negative());
    }

    #[test]
    fn test_proposal_size() {
        let proposal = ProposalSize::new(Some(100.0), None);

        assert_eq!(proposal.width_or(0.0), 100.0);
        assert_eq!(ProposalSize::UNSPECIFIED.width_or(50.0), 50.0);
    }

    #[test]
    fn test_sub_view_blanket_impls() {
        let fixed = Size::new(40.0, 12.0);
        let closure = |_: ProposalSize| Size::new(8.0, 8.0);

        assert_eq!(fixed.size_that_fits(ProposalSize::UNSPECIFIED), fixed);
        assert_eq!(
            closure.size_that_fits(ProposalSize::new(Some(1.0), None)),
            Size::new(8.0, 8.0)
        );
    }
}
