//! Visible range of a fixed-row-height list.

/// Rows rendered past the bottom edge to avoid blank flashes on fractional
/// scroll offsets.
pub const OVERSCAN: usize = 1;

/// The `[start, end)` slice of items to render and its vertical offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub offset_y: f64,
}

impl Window {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The visible items. Clamped to `items`, so a window computed for a
    /// longer list never panics.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Computes the window with the default overscan.
pub fn compute_window(
    item_count: usize,
    item_height: f64,
    container_height: f64,
    scroll_top: f64,
) -> Window {
    compute_window_with(item_count, item_height, container_height, scroll_top, OVERSCAN)
}

/// Computes the window.
///
/// Degenerate inputs are clamped: a negative or non-finite scroll offset or
/// container height counts as zero, and a non-positive item height renders
/// every item from the top.
pub fn compute_window_with(
    item_count: usize,
    item_height: f64,
    container_height: f64,
    scroll_top: f64,
    overscan: usize,
) -> Window {
    if !(item_height.is_finite() && item_height > 0.0) {
        return Window {
            start: 0,
            end: item_count,
            offset_y: 0.0,
        };
    }

    let scroll_top = clamp_non_negative(scroll_top);
    let container_height = clamp_non_negative(container_height);

    // Float to usize casts saturate.
    let start = ((scroll_top / item_height).floor() as usize).min(item_count);
    let visible = (container_height / item_height).ceil() as usize;
    let end = start
        .saturating_add(visible)
        .saturating_add(overscan)
        .min(item_count);

    Window {
        start,
        end,
        offset_y: start as f64 * item_height,
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
