//! Mapping grid placements to terminal rectangles.

use ratatui::layout::Rect;

use marketdash_core::Placement;

/// Minimum terminal rows per grid row.
pub const MIN_ROW_HEIGHT: u16 = 3;

/// Scale of one grid cell for a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub cols: u16,
    pub row_height: u16,
    /// Total grid height in terminal rows.
    pub content_height: u16,
}

impl GridMetrics {
    /// Fit `rows` grid rows into `area`, never below [`MIN_ROW_HEIGHT`].
    pub fn new(area: Rect, cols: u16, rows: u16) -> Self {
        let rows = rows.max(1);
        let row_height = (area.height / rows).max(MIN_ROW_HEIGHT);
        Self {
            cols: cols.max(1),
            row_height,
            content_height: rows.saturating_mul(row_height),
        }
    }

    /// Top and bottom terminal row of `p`, relative to the unscrolled grid.
    pub fn vertical_span(&self, p: &Placement) -> (u16, u16) {
        let top = p.y.saturating_mul(self.row_height);
        let bottom = p.y.saturating_add(p.h).saturating_mul(self.row_height);
        (top, bottom)
    }

    /// Screen rectangle of `p` inside `area`, clipped to it. `None` when the
    /// panel is scrolled completely out of view.
    pub fn rect(&self, p: &Placement, area: Rect, scroll: u16) -> Option<Rect> {
        let width = u32::from(area.width);
        let cols = u32::from(self.cols);
        let left = width * u32::from(p.x) / cols;
        let right = (width * (u32::from(p.x) + u32::from(p.w)) / cols).min(width);

        let (top, bottom) = self.vertical_span(p);
        let view_top = scroll;
        let view_bottom = scroll.saturating_add(area.height);
        if bottom <= view_top || top >= view_bottom || right <= left {
            return None;
        }
        let top = top.max(view_top) - scroll;
        let bottom = bottom.min(view_bottom) - scroll;

        Some(Rect {
            x: area.x + left as u16,
            y: area.y + top,
            width: (right - left) as u16,
            height: bottom - top,
        })
    }
}

/// Adjust `scroll` so that the span `top..bottom` is visible in a viewport of
/// `height` rows. A span taller than the viewport is aligned to its top.
pub fn scroll_to_show(scroll: u16, top: u16, bottom: u16, height: u16, content: u16) -> u16 {
    let max_scroll = content.saturating_sub(height);
    let scroll = if top < scroll || bottom.saturating_sub(top) > height {
        top
    } else if bottom > scroll + height {
        bottom - height
    } else {
        scroll
    };
    scroll.min(max_scroll)
}
