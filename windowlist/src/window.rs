use core::cmp;

use crate::size::SizeModel;
use crate::types::{Align, Window};

/// Computes the window of items to materialize for one scroll position.
///
/// The scroll offset is clamped to the scrollable range first, so
/// overscrolled inputs (rubber-banding, stale events after a shrink) never
/// produce an out-of-bounds window. Boundary policy at the viewport bottom:
/// an item ending exactly at the edge is included, an item starting exactly
/// there is not.
///
/// `overscan` extra items are added on both sides of the visible range,
/// clamped to the collection bounds, and `top_offset` is reported for the
/// widened start so the host can position the block directly.
pub fn compute_window(
    model: &mut SizeModel,
    scroll_offset: u64,
    viewport_height: u32,
    overscan: usize,
) -> Window {
    let count = model.item_count();
    if count == 0 {
        return Window::default();
    }

    let view = viewport_height as u64;
    let total = model.total_size();
    let scroll = scroll_offset.min(total.saturating_sub(view));

    if viewport_height == 0 {
        let start = model.index_at_offset(scroll);
        return Window {
            start_index: start,
            end_index: start,
            top_offset: model.prefix(start),
        };
    }
    if scroll >= total {
        // Only reachable when every size measured to zero.
        return Window {
            start_index: count,
            end_index: count,
            top_offset: total,
        };
    }

    let scroll_end = scroll.saturating_add(view);
    let start = model.index_at_offset(scroll);
    let end = model
        .index_at_offset(cmp::max(scroll_end.saturating_sub(1), scroll))
        .saturating_add(1);

    let start = start.saturating_sub(overscan);
    let end = cmp::min(count, end.saturating_add(overscan));

    Window {
        start_index: start,
        end_index: end,
        top_offset: model.prefix(start),
    }
}

/// Largest scroll offset that still fills the viewport, 0 when the content
/// is shorter than the viewport.
pub fn max_scroll_offset(model: &mut SizeModel, viewport_height: u32) -> u64 {
    model
        .total_size()
        .saturating_sub(viewport_height as u64)
}

pub fn clamp_scroll_offset(model: &mut SizeModel, offset: u64, viewport_height: u32) -> u64 {
    offset.min(max_scroll_offset(model, viewport_height))
}

/// Resolves the scroll offset that brings `index` into view with the given
/// alignment. `current_offset` feeds the `Auto` policy: already fully
/// visible items keep the current offset, otherwise the nearest edge wins.
///
/// The index is clamped to the collection and the result to the scrollable
/// range; an empty model yields 0.
pub fn scroll_offset_for(
    model: &mut SizeModel,
    index: usize,
    align: Align,
    viewport_height: u32,
    current_offset: u64,
) -> u64 {
    let count = model.item_count();
    if count == 0 {
        return 0;
    }
    let index = index.min(count - 1);
    let view = viewport_height as u64;
    let item_start = model.prefix(index);
    let item_size = model.size_of(index).unwrap_or(0) as u64;
    let item_end = item_start.saturating_add(item_size);

    let target = match align {
        Align::Start => item_start,
        Align::End => item_end.saturating_sub(view),
        Align::Center => {
            let center = item_start.saturating_add(item_size / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let cur_end = current_offset.saturating_add(view);
            if item_start >= current_offset && item_end <= cur_end {
                current_offset
            } else if item_start < current_offset {
                item_start
            } else {
                item_end.saturating_sub(view)
            }
        }
    };

    clamp_scroll_offset(model, target, viewport_height)
}
