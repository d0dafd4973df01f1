//! Layout helpers shared across components.

use ratatui::prelude::*;

/// A `width` x `height` rectangle anchored to the top-right corner of `r`,
/// inset by `margin` cells. The result is clamped to fit inside `r`.
pub fn top_right_rect(r: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(r.width.saturating_sub(margin));
    let height = height.min(r.height.saturating_sub(margin));
    let x = r.x + r.width.saturating_sub(width + margin);
    let y = r.y + margin.min(r.height.saturating_sub(height));
    Rect::new(x, y, width, height)
}

/// Centers a fixed-width column inside `r`, falling back to the full width
/// when `r` is narrower than `max_width`.
pub fn centered_column(r: Rect, max_width: u16) -> Rect {
    let width = max_width.min(r.width);
    Rect::new(r.x + (r.width - width) / 2, r.y, width, r.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_rect_hugs_top_right_corner() {
        let area = top_right_rect(Rect::new(0, 0, 80, 24), 30, 3, 1);
        assert_eq!(area, Rect::new(49, 1, 30, 3));
    }

    #[test]
    fn toast_rect_is_clamped_on_tiny_terminals() {
        let parent = Rect::new(0, 0, 10, 2);
        let area = top_right_rect(parent, 30, 3, 1);
        assert!(parent.contains(area.as_position()));
        assert!(area.right() <= parent.right());
        assert!(area.bottom() <= parent.bottom());
    }

    #[test]
    fn centered_column_caps_width() {
        assert_eq!(centered_column(Rect::new(0, 0, 120, 40), 100), Rect::new(10, 0, 100, 40));
        assert_eq!(centered_column(Rect::new(0, 0, 60, 40), 100), Rect::new(0, 0, 60, 40));
    }
}
