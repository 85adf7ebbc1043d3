#![no_std]
//! Core types for the `flowlayout` engine.
//!
//! This crate holds the vocabulary shared between the layout engine and its
//! host: geometry ([`Size`], [`Point`], [`Rect`]), the [`ProposalSize`] used
//! during size negotiation, the [`SubView`] and [`Layout`] traits that model
//! the host's two-pass measure/place protocol, and [`LayoutError`].
//!
//! Nothing here allocates per frame or keeps state between layout passes.

extern crate alloc;

pub mod error;
pub mod layout;

pub use error::LayoutError;
pub use layout::*;
