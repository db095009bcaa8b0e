//! Scrollable event list grouped under month dividers.
//!
//! Owns the live search buffer and the row selection; everything else
//! (likes, the detail dialog, hover tooltips) is requested through actions
//! so the app stays the single owner of event data.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use crate::config::DisplayConfig;
use crate::constants::{MSG_NO_EVENTS, MSG_NO_FILTER_MATCHES};
use crate::icons::IconService;
use crate::rows::{event_row_count, Row};
use crate::theme::Theme;
use crate::ui::core::{Action, Component};

/// Columns reserved at the right edge of each row for the like heart
const HEART_CELL_WIDTH: u16 = 4;

pub struct EventListComponent {
    rows: Vec<Row>,
    total_events: usize,
    loading: bool,
    list_state: ListState,
    filter: String,
    search_active: bool,
    icons: IconService,
    theme: Theme,
    display_config: DisplayConfig,
    // Area painted on the last frame, used to hit-test mouse events
    last_area: Option<Rect>,
    focused: bool,
}

impl Default for EventListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total_events: 0,
            loading: true,
            list_state: ListState::default(),
            filter: String::new(),
            search_active: false,
            icons: IconService::default(),
            theme: Theme::default(),
            display_config: DisplayConfig::default(),
            last_area: None,
            focused: true,
        }
    }

    /// Replace the visible rows, keeping the selection on the same event
    /// when it survives the rebuild
    pub fn update_data(&mut self, rows: Vec<Row>, total_events: usize, loading: bool) {
        let selected_key = self.selected_event_key();

        self.rows = rows;
        self.total_events = total_events;
        self.loading = loading;

        let restored = selected_key.and_then(|key| {
            self.rows
                .iter()
                .position(|row| matches!(row, Row::Event { key: k, .. } if *k == key))
        });

        match restored {
            Some(index) => self.list_state.select(Some(index)),
            None => self.select_first(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Identity key of the selected event row, if any
    pub fn selected_event_key(&self) -> Option<String> {
        let index = self.list_state.selected()?;
        match self.rows.get(index) {
            Some(Row::Event { key, .. }) => Some(key.clone()),
            _ => None,
        }
    }

    // Selection always lands on event rows; dividers are skipped over

    fn select_next(&mut self) {
        let start = self.list_state.selected().map(|i| i + 1).unwrap_or(0);
        if let Some(next) = (start..self.rows.len()).find(|&i| matches!(self.rows[i], Row::Event { .. })) {
            self.list_state.select(Some(next));
        }
    }

    fn select_previous(&mut self) {
        let Some(current) = self.list_state.selected() else {
            self.select_first();
            return;
        };
        if let Some(prev) = (0..current).rev().find(|&i| matches!(self.rows[i], Row::Event { .. })) {
            self.list_state.select(Some(prev));
        }
    }

    fn select_first(&mut self) {
        let first = self.rows.iter().position(|row| matches!(row, Row::Event { .. }));
        self.list_state.select(first);
    }

    fn select_last(&mut self) {
        let last = self.rows.iter().rposition(|row| matches!(row, Row::Event { .. }));
        self.list_state.select(last);
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.search_active = false;
                if self.filter.is_empty() {
                    Action::None
                } else {
                    self.filter.clear();
                    Action::FilterChanged(String::new())
                }
            }
            KeyCode::Enter => {
                self.search_active = false;
                Action::None
            }
            KeyCode::Backspace => {
                if self.filter.pop().is_some() {
                    Action::FilterChanged(self.filter.clone())
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c) => {
                // Let control chords (Ctrl+C) fall through to the global keys
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Action::None;
                }
                self.filter.push(c);
                Action::FilterChanged(self.filter.clone())
            }
            _ => Action::None,
        }
    }

    fn row_line(&self, row: &Row, inner_width: usize) -> Line<'static> {
        match row {
            Row::MonthDivider { label } => {
                let head = format!("── {} ", label);
                let fill = inner_width.saturating_sub(head.chars().count());
                Line::from(Span::styled(format!("{}{}", head, "─".repeat(fill)), self.theme.divider))
            }
            Row::Event {
                short_date,
                title,
                tags,
                liked,
                today,
                ..
            } => {
                let mut spans = Vec::new();

                spans.push(Span::styled(format!("{} ", self.icons.bullet()), self.theme.dim));

                let date_style = if *today { self.theme.today } else { self.theme.dim };
                spans.push(Span::styled(format!("{:<7}", short_date), date_style));

                let title_style = if *today { self.theme.today } else { self.theme.text };
                let title_text = if *today {
                    format!("{} {}", title, self.icons.today())
                } else {
                    title.clone()
                };
                spans.push(Span::styled(title_text, title_style));

                if self.display_config.show_tags && !tags.is_empty() {
                    let tag_text = tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ");
                    spans.push(Span::styled(format!("  {}", tag_text), self.theme.tag));
                }

                // Right-align the heart into its own cell
                let heart = if *liked {
                    self.icons.heart_liked()
                } else {
                    self.icons.heart_unliked()
                };
                let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
                let heart_width = heart.chars().count() + 1;
                let pad = inner_width.saturating_sub(used + heart_width);
                spans.push(Span::raw(" ".repeat(pad)));

                let heart_style = if *liked { self.theme.heart } else { self.theme.dim };
                spans.push(Span::styled(format!("{} ", heart), heart_style));

                Line::from(spans)
            }
        }
    }

    fn list_title(&self) -> String {
        let shown = event_row_count(&self.rows);
        let mut title = if self.filter.is_empty() {
            format!(" {} Events ({}) ", self.icons.events_title(), self.total_events)
        } else {
            format!(" {} Events ({}/{}) ", self.icons.events_title(), shown, self.total_events)
        };

        if self.search_active || !self.filter.is_empty() {
            title.push_str(&format!("{} /{} ", self.icons.search(), self.filter));
        }

        title
    }
}

impl Component for EventListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.search_active {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.select_first();
                Action::None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select_last();
                Action::None
            }
            KeyCode::Enter => match self.selected_event_key() {
                Some(key) => Action::OpenEventDetail(key),
                None => Action::None,
            },
            KeyCode::Char(' ') | KeyCode::Char('l') => match self.selected_event_key() {
                Some(key) => Action::ToggleLike(key),
                None => Action::None,
            },
            KeyCode::Char('/') => {
                self.search_active = true;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some(area) = self.last_area else {
            return Action::None;
        };

        let in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        // Content rows live between the top and bottom border lines
        let on_content_row = mouse.row > area.y && mouse.row + 1 < area.y + area.height;

        match mouse.kind {
            MouseEventKind::Moved => {
                if !in_area || !on_content_row {
                    return Action::HoverCleared;
                }

                let local_index = (mouse.row - area.y - 1) as usize;
                let rendered = self.list_state.offset() + local_index;
                match self.rows.get(rendered) {
                    Some(Row::Event { key, .. }) => Action::HoverEvent {
                        key: key.clone(),
                        column: mouse.column,
                        row: mouse.row,
                    },
                    _ => Action::HoverCleared,
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if !in_area || !on_content_row {
                    return Action::None;
                }

                let local_index = (mouse.row - area.y - 1) as usize;
                let rendered = self.list_state.offset() + local_index;
                match self.rows.get(rendered) {
                    Some(Row::Event { key, .. }) => {
                        let key = key.clone();
                        self.list_state.select(Some(rendered));

                        let heart_start = (area.x + area.width).saturating_sub(1 + HEART_CELL_WIDTH);
                        if mouse.column >= heart_start {
                            Action::ToggleLike(key)
                        } else {
                            Action::OpenEventDetail(key)
                        }
                    }
                    _ => Action::None,
                }
            }
            MouseEventKind::ScrollUp => {
                if in_area {
                    // Rows shift under the cursor, so the hover preview is stale
                    self.select_previous();
                    return Action::HoverCleared;
                }
                Action::None
            }
            MouseEventKind::ScrollDown => {
                if in_area {
                    self.select_next();
                    return Action::HoverCleared;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = Some(rect);

        let border_style = if self.focused { self.theme.accent } else { self.theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.list_title())
            .title_style(self.theme.title)
            .border_style(border_style)
            .style(self.theme.base);

        if self.rows.is_empty() {
            let message = if self.loading {
                String::new()
            } else if self.total_events == 0 {
                MSG_NO_EVENTS.to_string()
            } else {
                MSG_NO_FILTER_MATCHES.to_string()
            };

            let paragraph = Paragraph::new(message)
                .block(block)
                .style(self.theme.dim)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, rect);
            return;
        }

        let inner_width = rect.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(self.row_line(row, inner_width)))
            .collect();

        let list = List::new(items).block(block).highlight_style(self.theme.selection);
        f.render_stateful_widget(list, rect, &mut self.list_state);

        let visible_height = rect.height.saturating_sub(2) as usize;
        if self.rows.len() > visible_height {
            let mut scrollbar_state = ScrollbarState::new(self.rows.len())
                .viewport_content_length(visible_height)
                .position(self.list_state.selected().unwrap_or(0));
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .style(self.theme.dim);
            f.render_stateful_widget(
                scrollbar,
                rect.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
