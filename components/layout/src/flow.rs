//! [`Layout`] adapter for hosts that speak the proposal protocol.

use alloc::{vec, vec::Vec};

use flowlayout_core::{Layout, ProposalSize, Rect, Size, SubView};
use tracing::warn;

use crate::{LayoutConfig, measure, place};

/// A flow container: wraps children left-to-right, top-to-bottom.
///
/// Children are asked for their natural size with
/// [`ProposalSize::UNSPECIFIED`]; the container never proposes a narrower
/// width to them.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    /// Spacing and justification.
    pub config: LayoutConfig,
    /// Maximum line width used when the parent leaves the width open.
    pub unspecified_width: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl FlowLayout {
    /// Creates a flow layout that never wraps under an unspecified width.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            unspecified_width: f32::INFINITY,
        }
    }

    /// Sets the spacing between items and between lines.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.config.min_spacing = spacing;
        self
    }

    /// Enables or disables justified columns.
    #[must_use]
    pub const fn justified(mut self, justified: bool) -> Self {
        self.config.should_justify = justified;
        self
    }

    /// Sets the width to wrap at when the proposal has none.
    #[must_use]
    pub const fn unspecified_width(mut self, width: f32) -> Self {
        self.unspecified_width = width;
        self
    }
}

/// Convenience constructor with default spacing and exact widths.
#[must_use]
pub fn flow() -> FlowLayout {
    FlowLayout::default()
}

fn natural_sizes(children: &[&dyn SubView]) -> Vec<Size> {
    children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let size = child.size_that_fits(ProposalSize::UNSPECIFIED);
            if size.is_finite_non_negative() {
                size
            } else {
                warn!(index, width = size.width, height = size.height, "child reported invalid size");
                Size::new(sanitize(size.width), sanitize(size.height))
            }
        })
        .collect()
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

impl Layout for FlowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let sizes = natural_sizes(children);
        let max_width = proposal.width_or(self.unspecified_width);

        measure(&sizes, max_width, &self.config).unwrap_or_else(|error| {
            warn!(%error, "flow measurement rejected");
            Size::zero()
        })
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let sizes = natural_sizes(children);

        match place(
            &sizes,
            bounds.origin(),
            bounds.max_x(),
            bounds.width(),
            &self.config,
        ) {
            Ok(anchors) => anchors
                .into_iter()
                .zip(sizes)
                .map(|(anchor, size)| Rect::from_center(anchor, size))
                .collect(),
            Err(error) => {
                warn!(%error, "flow placement rejected");
                vec![Rect::default(); children.len()]
            }
        }
    }
}
