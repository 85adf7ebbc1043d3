//! Size computation for a flow of items.

use alloc::vec::Vec;

use flowlayout_core::{LayoutError, Size};
use tracing::debug;

use crate::{
    LayoutConfig,
    packing::{Line, check_items, check_max_width, pack_lines, slot_widths},
};

/// Computes the bounding size of the flow for `max_width`.
///
/// Width is the widest line; height is the sum of line heights with
/// `min_spacing` between lines and none after the last. An empty sequence
/// measures as [`Size::zero`].
///
/// # Errors
///
/// Returns [`LayoutError`] for negative or non-finite item sizes, invalid
/// spacing or a NaN/negative `max_width`.
pub fn measure(
    item_sizes: &[Size],
    max_width: f32,
    config: &LayoutConfig,
) -> Result<Size, LayoutError> {
    let lines = lines(item_sizes, max_width, config)?;
    let size = bounding_size(&lines, config.min_spacing);

    debug!(
        items = item_sizes.len(),
        lines = lines.len(),
        max_width,
        width = size.width,
        height = size.height,
        "measured flow"
    );

    Ok(size)
}

/// Returns the line breaks [`measure`] uses for these inputs.
///
/// # Errors
///
/// Same conditions as [`measure`].
pub fn lines(
    item_sizes: &[Size],
    max_width: f32,
    config: &LayoutConfig,
) -> Result<Vec<Line>, LayoutError> {
    config.validate()?;
    check_max_width(max_width)?;
    check_items(item_sizes)?;

    let slots = slot_widths(item_sizes, config);
    let heights: Vec<f32> = item_sizes.iter().map(|size| size.height).collect();

    Ok(pack_lines(&slots, &heights, max_width, config.min_spacing))
}

fn bounding_size(lines: &[Line], min_spacing: f32) -> Size {
    let Some(last) = lines.last() else {
        return Size::zero();
    };

    let width = lines.iter().map(|line| line.width).fold(0.0, f32::max);
    // Advance line tops the way `place` does so the bottom edges agree.
    let last_top = lines
        .windows(2)
        .fold(0.0, |top, pair| top + (pair[0].height + min_spacing));

    Size::new(width, last_top + last.height)
}
