#![no_std]
//! Flow layout engine.
//!
//! Items are laid out left-to-right in input order and wrap onto a new line
//! when the next one would cross the maximum line width. Two passes share a
//! single greedy line breaker:
//!
//! - [`measure`] returns the bounding [`Size`] of the flow,
//! - [`place`] returns the center anchor of every item.
//!
//! In justified mode ([`LayoutConfig::should_justify`]) every item gets the
//! slot width of the widest item, which lines items up in columns.
//!
//! Hosts that negotiate sizes through proposals can use [`FlowLayout`], an
//! implementation of the [`Layout`] trait on top of the two passes.
//!
//! # Example
//!
//! ```
//! use flowlayout_layout::{LayoutConfig, Point, Size, measure, place};
//!
//! let items = [Size::new(50.0, 20.0), Size::new(30.0, 40.0)];
//! let config = LayoutConfig::default().spacing(10.0);
//!
//! assert_eq!(measure(&items, 1000.0, &config), Ok(Size::new(90.0, 40.0)));
//! assert_eq!(
//!     place(&items, Point::zero(), 1000.0, 1000.0, &config),
//!     Ok(vec![Point::new(25.0, 10.0), Point::new(75.0, 20.0)]),
//! );
//! ```

extern crate alloc;

pub use flowlayout_core::*;

mod config;
pub use config::{DEFAULT_MIN_SPACING, LayoutConfig};
pub mod flow;
pub use flow::{FlowLayout, flow};
mod measure;
pub use measure::{lines, measure};
pub mod packing;
pub use packing::Line;
mod place;
pub use place::place;
