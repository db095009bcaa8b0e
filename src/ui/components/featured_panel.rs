//! Featured panel showing the next upcoming event and its countdown.
//!
//! Pure display: the app decides what the next event is, when the panel
//! becomes visible, and what the countdown line says on each tick.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::MSG_NO_UPCOMING;
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::{Action, Component};

/// Render-ready summary of the featured event
#[derive(Debug, Clone)]
pub struct FeaturedData {
    pub title: String,
    /// "October 5, 2024 at 6:00 PM" style line
    pub date_line: String,
    pub location: String,
    /// Image URL, shown as a link line
    pub img: String,
    pub description: String,
    pub tags: Vec<String>,
}

pub struct FeaturedPanel {
    featured: Option<FeaturedData>,
    /// Stays false during the short reveal delay after load
    revealed: bool,
    countdown_text: Option<String>,
    icons: IconService,
    theme: Theme,
}

impl Default for FeaturedPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeaturedPanel {
    pub fn new() -> Self {
        Self {
            featured: None,
            revealed: false,
            countdown_text: None,
            icons: IconService::default(),
            theme: Theme::default(),
        }
    }

    pub fn update_data(&mut self, featured: Option<FeaturedData>, revealed: bool, countdown_text: Option<String>) {
        self.featured = featured;
        self.revealed = revealed;
        self.countdown_text = countdown_text;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }
}

impl Component for FeaturedPanel {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Next Event ", self.icons.featured_title()))
            .title_style(self.theme.title)
            .border_style(self.theme.border)
            .style(self.theme.base);

        if !self.revealed {
            // Blank until the reveal delay has passed
            f.render_widget(block, rect);
            return;
        }

        let mut lines = Vec::new();

        match &self.featured {
            Some(data) => {
                lines.push(Line::from(Span::styled(data.title.clone(), self.theme.title)));
                lines.push(Line::from(Span::styled(
                    format!("{} {}", self.icons.clock(), data.date_line),
                    self.theme.accent,
                )));
                if !data.location.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", self.icons.location(), data.location),
                        self.theme.dim,
                    )));
                }
                if !data.img.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", self.icons.link(), data.img),
                        self.theme.link,
                    )));
                }
                if !data.tags.is_empty() {
                    let tag_text = data.tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ");
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", self.icons.tag(), tag_text),
                        self.theme.tag,
                    )));
                }
                if !data.description.is_empty() {
                    lines.push(Line::default());
                    for description_line in data.description.lines() {
                        lines.push(Line::from(Span::styled(description_line.to_string(), self.theme.text)));
                    }
                }
                lines.push(Line::default());
                if let Some(countdown) = &self.countdown_text {
                    lines.push(Line::from(Span::styled(countdown.clone(), self.theme.countdown)));
                }
            }
            None => {
                lines.push(Line::from(Span::styled(MSG_NO_UPCOMING.to_string(), self.theme.dim)));
            }
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}
