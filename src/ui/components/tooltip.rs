//! Hover tooltip overlay for event rows.
//!
//! Drawn last so it floats above the list; the app suppresses it whenever
//! a dialog is open.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::{TOOLTIP_PREVIEW_LEN, TOOLTIP_WIDTH};
use crate::events::Event;
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

pub struct Tooltip;

impl Tooltip {
    pub fn render(f: &mut Frame, screen: Rect, event: &Event, column: u16, row: u16, icons: &IconService, theme: &Theme) {
        let preview = description_preview(&event.description);

        let width = TOOLTIP_WIDTH.min(screen.width);
        let inner_width = width.saturating_sub(2).max(1) as usize;

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(event.title.clone(), theme.title)));
        if !preview.is_empty() {
            lines.push(Line::from(Span::styled(preview.clone(), theme.tooltip)));
        }
        if !event.img.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{} {}", icons.link(), event.img),
                theme.link,
            )));
        }

        // Estimate wrapped height so the box hugs its content
        let content_height: usize = lines
            .iter()
            .map(|line| {
                let chars: usize = line.spans.iter().map(|span| span.content.chars().count()).sum();
                chars.div_ceil(inner_width).max(1)
            })
            .sum();
        let height = (content_height as u16).saturating_add(2).min(screen.height);

        let area = LayoutManager::tooltip_rect(column, row, width, height, screen);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .style(theme.tooltip);

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

/// First [`TOOLTIP_PREVIEW_LEN`] characters of the description, with an
/// ellipsis when truncated
fn description_preview(description: &str) -> String {
    if description.chars().count() > TOOLTIP_PREVIEW_LEN {
        let truncated: String = description.chars().take(TOOLTIP_PREVIEW_LEN).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    }
}
