//! Status bar component

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::ui::core::{Action, Component};

/// One-line bar under the main panes: search input while searching,
/// shortcut hints otherwise
pub struct StatusBar {
    loading: bool,
    search_active: bool,
    filter: String,
    toggle_label: &'static str,
    theme: Theme,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            loading: false,
            search_active: false,
            filter: String::new(),
            toggle_label: "Brighten",
            theme: Theme::default(),
        }
    }

    pub fn update_data(&mut self, loading: bool, search_active: bool, filter: String, toggle_label: &'static str) {
        self.loading = loading;
        self.search_active = search_active;
        self.filter = filter;
        self.toggle_label = toggle_label;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Component for StatusBar {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (status_text, style, alignment) = if self.search_active {
            (format!("/{}█", self.filter), self.theme.accent, Alignment::Left)
        } else if self.loading {
            ("Loading events...".to_string(), self.theme.accent, Alignment::Center)
        } else {
            (
                format!(
                    "Enter: details • Space: like • /: search • t: {} • S: subscribe • ?: help • q: quit",
                    self.toggle_label
                ),
                self.theme.status_bar,
                Alignment::Center,
            )
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(alignment)
            .style(style);

        f.render_widget(status_bar, rect);
    }
}
