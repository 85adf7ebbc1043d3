//! Greedy line breaking shared by measurement and placement.
//!
//! Both passes call [`pack_lines`] with the same slot widths, so the size
//! reported by [`measure`](crate::measure) always describes the lines that
//! [`place`](crate::place) draws.

use alloc::vec::Vec;
use core::ops::Range;

use flowlayout_core::{LayoutError, Size};
use tracing::trace;

use crate::LayoutConfig;

/// A contiguous run of items sharing one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Indices of the items on this line, in input order.
    pub range: Range<usize>,
    /// Slot widths plus the gaps between them, without trailing spacing.
    pub width: f32,
    /// Tallest natural height on the line.
    pub height: f32,
}

impl Line {
    /// Number of items on the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Lines produced by [`pack_lines`] always hold at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether the item at `index` sits on this line.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}

/// Width reserved for each item: its natural width, or the widest natural
/// width of the whole sequence when justifying.
#[must_use]
pub fn slot_widths(item_sizes: &[Size], config: &LayoutConfig) -> Vec<f32> {
    if config.should_justify {
        let widest = item_sizes
            .iter()
            .map(|size| size.width)
            .fold(0.0, f32::max);
        alloc::vec![widest; item_sizes.len()]
    } else {
        item_sizes.iter().map(|size| size.width).collect()
    }
}

/// Assigns every item to exactly one line, in order.
///
/// An item starts a new line when it would push the current line past
/// `max_line_width` and the line already holds something. An item wider than
/// `max_line_width` therefore still gets a line of its own and overflows it.
#[must_use]
pub fn pack_lines(
    slot_widths: &[f32],
    item_heights: &[f32],
    max_line_width: f32,
    min_spacing: f32,
) -> Vec<Line> {
    debug_assert_eq!(slot_widths.len(), item_heights.len());

    let mut lines = Vec::new();
    let mut start = 0;
    // Slots plus inner gaps of the current line. The value a line reports is
    // the same sum the break test compared, so granting it back as the
    // maximum width reproduces the same breaks.
    let mut content = 0.0_f32;
    let mut line_height = 0.0_f32;

    for (index, (&slot, &height)) in slot_widths.iter().zip(item_heights).enumerate() {
        let occupied = index > start && content + min_spacing > 0.0;
        let extended = content + min_spacing + slot;

        if occupied && extended > max_line_width {
            trace!(
                line = lines.len(),
                items = index - start,
                width = content,
                height = line_height,
                "line break"
            );
            lines.push(Line {
                range: start..index,
                width: content,
                height: line_height,
            });
            start = index;
            content = slot;
            line_height = height;
        } else if index == start {
            content = slot;
            line_height = height;
        } else {
            content = extended;
            line_height = line_height.max(height);
        }
    }

    if start < slot_widths.len() {
        lines.push(Line {
            range: start..slot_widths.len(),
            width: content,
            height: line_height,
        });
    }

    lines
}

pub(crate) fn check_items(item_sizes: &[Size]) -> Result<(), LayoutError> {
    item_sizes
        .iter()
        .enumerate()
        .find(|(_, size)| !size.is_finite_non_negative())
        .map_or(Ok(()), |(index, size)| {
            Err(LayoutError::InvalidItemSize {
                index,
                width: size.width,
                height: size.height,
            })
        })
}

pub(crate) fn check_max_width(max_width: f32) -> Result<(), LayoutError> {
    // Infinity is allowed and means the line never wraps.
    if max_width >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidMaxWidth(max_width))
    }
}
