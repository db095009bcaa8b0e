//! Modal dialog component for various user interactions.
//!
//! This component provides a single modal layer above the main panes. It
//! handles the event detail view, the subscribe form, and system dialogs
//! like help, logs, and info/error messages.

use crate::constants::MSG_INVALID_EMAIL;
use crate::events::Event;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

use crate::ui::components::dialogs::{event_dialogs, system_dialogs};

/// Modal dialog component that handles various user interactions.
///
/// # Dialog Types
/// - **Event detail** - Full event record with like, RSVP, calendar and
///   share shortcuts
/// - **Subscribe** - Email input form with validation
/// - **System dialogs** - Info, error, help, and logs
///
/// Only one dialog is open at a time. While visible it captures every key
/// event; everything it cannot answer locally is emitted as an action.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Inline validation message for the subscribe form
    pub input_error: Option<String>,
    pub icons: IconService,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    // Event shown by the detail dialog, refreshed by the app
    event: Option<Event>,
    liked: bool,
    // Box painted on the last frame, used to hit-test outside clicks
    last_area: Option<Rect>,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            input_error: None,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            event: None,
            liked: false,
            last_area: None,
            logger,
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Refresh the record backing the detail dialog
    pub fn update_event(&mut self, event: Option<Event>, liked: bool) {
        self.event = event;
        self.liked = liked;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::Subscribe) => {
                let email = self.input_buffer.trim().to_string();
                if email.is_empty() {
                    // Keep the typed text so the user can correct it
                    self.input_error = Some(MSG_INVALID_EMAIL.to_string());
                    Action::None
                } else {
                    Action::SubscribeEmail(email)
                }
            }
            _ => Action::None,
        }
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_error = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.event = None;
        self.liked = false;
        self.last_area = None;
    }

    /// Box each dialog type occupies on a screen of the given size
    fn dialog_area(dialog_type: &DialogType, screen: Rect) -> Rect {
        match dialog_type {
            DialogType::EventDetail { .. } => LayoutManager::centered_rect(70, 70, screen),
            DialogType::Subscribe => LayoutManager::centered_rect_lines(50, 9, screen),
            DialogType::Info(_) => LayoutManager::centered_rect_lines(60, 10, screen),
            DialogType::Error(_) => LayoutManager::centered_rect_lines(70, 12, screen),
            DialogType::Help | DialogType::Logs => LayoutManager::centered_rect(90, 90, screen),
        }
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
        self.scrollbar_state = self.scrollbar_state.position(usize::MAX);
    }

    fn handle_subscribe_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) => {
                // Control chords never type into the email field
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Action::None;
                }
                let byte_pos: usize = self
                    .input_buffer
                    .chars()
                    .take(self.cursor_position)
                    .map(|ch| ch.len_utf8())
                    .sum();
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                self.input_error = None;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos: usize = self
                        .input_buffer
                        .chars()
                        .take(self.cursor_position)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    let prev_char_len = self
                        .input_buffer
                        .chars()
                        .nth(self.cursor_position - 1)
                        .map(|ch| ch.len_utf8())
                        .unwrap_or(1);
                    self.input_buffer.remove(byte_pos - prev_char_len);
                    self.cursor_position -= 1;
                    self.input_error = None;
                }
                Action::None
            }
            KeyCode::Delete => {
                let char_count = self.input_buffer.chars().count();
                if self.cursor_position < char_count {
                    let byte_pos: usize = self
                        .input_buffer
                        .chars()
                        .take(self.cursor_position)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    self.input_buffer.remove(byte_pos);
                    self.input_error = None;
                }
                Action::None
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                let char_count = self.input_buffer.chars().count();
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        match &self.dialog_type {
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                // Info/error dialogs with scrolling support
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.scroll_up();
                        Action::None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.scroll_down();
                        Action::None
                    }
                    KeyCode::PageUp => {
                        self.page_up();
                        Action::None
                    }
                    KeyCode::PageDown => {
                        self.page_down();
                        Action::None
                    }
                    KeyCode::Home => {
                        self.scroll_to_top();
                        Action::None
                    }
                    KeyCode::End => {
                        self.scroll_to_bottom();
                        Action::None
                    }
                    _ => Action::HideDialog, // Any other key dismisses the dialog
                }
            }
            Some(DialogType::Help) => {
                // Help dialog with scrolling support
                match key.code {
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.scroll_up();
                        Action::None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.scroll_down();
                        Action::None
                    }
                    KeyCode::PageUp => {
                        self.page_up();
                        Action::None
                    }
                    KeyCode::PageDown => {
                        self.page_down();
                        Action::None
                    }
                    KeyCode::Home => {
                        self.scroll_to_top();
                        Action::None
                    }
                    KeyCode::End => {
                        self.scroll_to_bottom();
                        Action::None
                    }
                    _ => Action::None,
                }
            }
            Some(DialogType::Logs) => {
                // Logs dialog with scrolling support (same as help dialog)
                match key.code {
                    KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => Action::HideDialog,
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.scroll_up();
                        Action::None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.scroll_down();
                        Action::None
                    }
                    KeyCode::PageUp => {
                        self.page_up();
                        Action::None
                    }
                    KeyCode::PageDown => {
                        self.page_down();
                        Action::None
                    }
                    KeyCode::Home => {
                        self.scroll_to_top();
                        Action::None
                    }
                    KeyCode::End => {
                        self.scroll_to_bottom();
                        Action::None
                    }
                    _ => Action::None,
                }
            }
            Some(DialogType::EventDetail { event_key }) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Char('l') => Action::ToggleLike(event_key.clone()),
                KeyCode::Char('r') => Action::Rsvp,
                KeyCode::Char('c') => Action::AddToCalendar,
                KeyCode::Char('f') => Action::ShareFacebook,
                KeyCode::Char('x') => Action::ShareX,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.page_up();
                    Action::None
                }
                KeyCode::PageDown => {
                    self.page_down();
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_to_top();
                    Action::None
                }
                KeyCode::End => {
                    self.scroll_to_bottom();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Subscribe) => self.handle_subscribe_key(key),
            None => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        // A click outside the dialog box dismisses it, like clicking the
        // backdrop of a modal
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(area) = self.last_area {
                let inside = mouse.column >= area.x
                    && mouse.column < area.x + area.width
                    && mouse.row >= area.y
                    && mouse.row < area.y + area.height;
                if !inside {
                    return Action::HideDialog;
                }
            }
        }

        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.input_buffer.clear();
                self.cursor_position = 0;
                self.input_error = None;
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(dialog_type) = self.dialog_type.clone() {
            let area = Self::dialog_area(&dialog_type, rect);
            self.last_area = Some(area);

            match dialog_type {
                DialogType::EventDetail { event_key } => {
                    if let Some(event) = self.event.clone() {
                        event_dialogs::render_event_detail_dialog(
                            f,
                            area,
                            &self.icons,
                            &event,
                            self.liked,
                            self.scroll_offset,
                            &mut self.scrollbar_state,
                        );
                    } else {
                        self.logger.log(format!("Detail dialog has no event for key {}", event_key));
                    }
                }
                DialogType::Subscribe => {
                    event_dialogs::render_subscribe_dialog(
                        f,
                        area,
                        &self.icons,
                        &self.input_buffer,
                        self.input_error.as_deref(),
                    );
                }
                DialogType::Info(message) => {
                    system_dialogs::render_info_dialog(
                        f,
                        area,
                        &self.icons,
                        &message,
                        self.scroll_offset,
                        &mut self.scrollbar_state,
                    );
                }
                DialogType::Error(message) => {
                    system_dialogs::render_error_dialog(
                        f,
                        area,
                        &self.icons,
                        &message,
                        self.scroll_offset,
                        &mut self.scrollbar_state,
                    );
                }
                DialogType::Help => {
                    system_dialogs::render_help_dialog(f, area, self.scroll_offset, &mut self.scrollbar_state);
                }
                DialogType::Logs => {
                    system_dialogs::render_logs_dialog(
                        f,
                        area,
                        &self.logger,
                        self.scroll_offset,
                        &mut self.scrollbar_state,
                    );
                }
            }
        }
    }
}
