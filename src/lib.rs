#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

#[doc(inline)]
pub use flowlayout_layout as layout;

#[doc(inline)]
pub use flowlayout_layout::{
    DEFAULT_MIN_SPACING, FlowLayout, Layout, LayoutConfig, LayoutError, Line, Point,
    ProposalSize, Rect, Size, SubView, flow, lines, measure, place,
};

pub mod prelude {
    //! Commonly used types and functions in one import.
    //!
    //! ```rust
    //! use flowlayout::prelude::*;
    //!
    //! let size = measure(&[Size::new(10.0, 10.0)], 100.0, &LayoutConfig::default());
    //! assert_eq!(size, Ok(Size::new(10.0, 10.0)));
    //! ```
    pub use super::{
        FlowLayout, Layout, LayoutConfig, LayoutError, Point, ProposalSize, Rect, Size, SubView,
        flow, measure, place,
    };
}
