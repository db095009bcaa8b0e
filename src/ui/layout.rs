//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FEATURED_MAX_WIDTH, FEATURED_MIN_WIDTH, LIST_MIN_WIDTH, TOOLTIP_PADDING_X, TOOLTIP_PADDING_Y};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (list+featured on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let screen_width = area.width;
        let screen_height = area.height;

        // Top area: event list + featured panel (all height except 1 line for status)
        let top_height = screen_height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, screen_width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + top_height, screen_width, 1);

        vec![top_area, status_area]
    }

    /// Calculate the top pane layout (event list + featured panel side by side).
    ///
    /// The featured panel keeps its configured width within the allowed
    /// range; the list always keeps at least [`LIST_MIN_WIDTH`] columns on
    /// narrow terminals.
    #[must_use]
    pub fn top_pane_layout(area: Rect, featured_width: u16) -> Vec<Rect> {
        let featured_width = featured_width
            .clamp(FEATURED_MIN_WIDTH, FEATURED_MAX_WIDTH)
            .min(area.width.saturating_sub(LIST_MIN_WIDTH));
        let list_width = area.width.saturating_sub(featured_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(list_width), Constraint::Length(featured_width)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Place a tooltip box near the cursor.
    ///
    /// The box sits right of and below the cursor with a small gap. When it
    /// would run past the right or bottom screen edge it flips to the other
    /// side of the cursor, and is finally clamped fully on screen.
    #[must_use]
    pub fn tooltip_rect(column: u16, row: u16, width: u16, height: u16, screen: Rect) -> Rect {
        let width = width.min(screen.width);
        let height = height.min(screen.height);

        let mut x = column.saturating_add(TOOLTIP_PADDING_X);
        if x.saturating_add(width) > screen.x + screen.width {
            x = column.saturating_sub(width.saturating_add(TOOLTIP_PADDING_X));
        }
        let max_x = (screen.x + screen.width).saturating_sub(width);
        let x = x.clamp(screen.x, max_x.max(screen.x));

        let mut y = row.saturating_add(TOOLTIP_PADDING_Y);
        if y.saturating_add(height) > screen.y + screen.height {
            y = row.saturating_sub(height.saturating_add(TOOLTIP_PADDING_Y));
        }
        let max_y = (screen.y + screen.height).saturating_sub(height);
        let y = y.clamp(screen.y, max_y.max(screen.y));

        Rect::new(x, y, width, height)
    }
}
