//! Placement of a flow of items around center anchors.

use alloc::vec::Vec;

use flowlayout_core::{LayoutError, Point, Size};
use tracing::debug;

use crate::{
    LayoutConfig,
    packing::{check_items, check_max_width, pack_lines, slot_widths},
};

/// Computes the center anchor of every item, in input order.
///
/// Lines start at `origin` and wrap before `min(origin.x + max_width,
/// bounds_max_x)`. Each anchor sits at the middle of the item's slot
/// horizontally and at half the item's own natural height below the top of
/// its line, so justification widens slots without stretching items.
///
/// With the same `max_width` and a right edge that does not clip it, the
/// lines are exactly those [`measure`](crate::measure) sums up.
///
/// # Errors
///
/// Returns [`LayoutError`] for negative or non-finite item sizes, invalid
/// spacing, a non-finite origin, a NaN `bounds_max_x` or a NaN/negative
/// `max_width`.
pub fn place(
    item_sizes: &[Size],
    origin: Point,
    bounds_max_x: f32,
    max_width: f32,
    config: &LayoutConfig,
) -> Result<Vec<Point>, LayoutError> {
    config.validate()?;
    check_max_width(max_width)?;
    check_items(item_sizes)?;
    if !(origin.x.is_finite() && origin.y.is_finite()) {
        return Err(LayoutError::InvalidOrigin {
            x: origin.x,
            y: origin.y,
        });
    }
    if bounds_max_x.is_nan() {
        return Err(LayoutError::InvalidBounds(bounds_max_x));
    }

    // Keep `max_width` untouched unless the bounds clip it, so both passes
    // compare against the same number.
    let available = if origin.x + max_width <= bounds_max_x {
        max_width
    } else {
        (bounds_max_x - origin.x).max(0.0)
    };

    let spacing = config.min_spacing;
    let slots = slot_widths(item_sizes, config);
    let heights: Vec<f32> = item_sizes.iter().map(|size| size.height).collect();
    let lines = pack_lines(&slots, &heights, available, spacing);

    let mut anchors = Vec::with_capacity(item_sizes.len());
    let mut line_y = origin.y;
    let mut previous_height = None;

    for line in &lines {
        if let Some(height) = previous_height {
            line_y += height + spacing;
        }

        let mut line_x = origin.x;
        for index in line.range.clone() {
            let slot = slots[index];
            anchors.push(Point::new(
                line_x + slot / 2.0,
                line_y + item_sizes[index].height / 2.0,
            ));
            line_x += slot + spacing;
        }

        previous_height = Some(line.height);
    }

    debug!(
        items = item_sizes.len(),
        lines = lines.len(),
        available,
        "placed flow"
    );

    Ok(anchors)
}
