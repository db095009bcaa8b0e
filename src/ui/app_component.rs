use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::FEATURED_REVEAL_MS;
use crate::countdown::{format_remaining, remaining_seconds, COUNTDOWN_OVER};
use crate::events::{find_by_key, next_event, prepare_events, Event};
use crate::export;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::rows::build_rows;
use crate::source::EventSource;
use crate::storage::{StateStore, StorageError};
use crate::theme::{ColorScheme, Theme};
use crate::ui::components::{DialogComponent, EventListComponent, FeaturedData, FeaturedPanel, StatusBar, Tooltip};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub events: Vec<Event>,
    pub loading: bool,
    pub filter: String,
    /// Key of the event currently shown by the detail dialog
    pub selected_key: Option<String>,
    /// Hovered event key plus the pointer position that produced it
    pub hover: Option<(String, u16, u16)>,
    /// Key of the nearest upcoming event
    pub featured_key: Option<String>,
    pub countdown_text: Option<String>,
    pub countdown_finished: bool,
    pub loaded_at: Option<Instant>,
    pub featured_revealed: bool,
}

pub struct AppComponent {
    // Component composition
    event_list: EventListComponent,
    featured: FeaturedPanel,
    status_bar: StatusBar,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    config: Config,
    store: StateStore,
    source: Arc<dyn EventSource>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,
    theme: Theme,

    // Simple UI state
    should_quit: bool,
    countdown_task: Option<TaskId>,
    // An unwritable state file is reported once, then only logged
    storage_error_reported: bool,
}

impl AppComponent {
    pub fn new(config: Config, store: StateStore, source: Arc<dyn EventSource>, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(config.ui.icon_theme);
        let theme = Theme::new(ColorScheme::from_dark_flag(store.dark_mode()));

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        Self {
            event_list: EventListComponent::new(),
            featured: FeaturedPanel::new(),
            status_bar: StatusBar::new(),
            dialog: DialogComponent::new(logger.clone()),
            state,
            config,
            store,
            source,
            task_manager,
            background_action_rx,
            logger,
            icons,
            theme,
            should_quit: false,
            countdown_task: None,
            storage_error_reported: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Currently open dialog, if any
    pub fn open_dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Key of the event the detail dialog is acting on
    pub fn selected_key(&self) -> Option<&str> {
        self.state.selected_key.as_deref()
    }

    /// Trigger the initial event load and the countdown ticker on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Starting initial event load".to_string());
        let _task_id = self.task_manager.spawn_events_load(self.source.clone());
        self.countdown_task = Some(self.task_manager.spawn_countdown_ticker());
        self.sync_component_data();
    }

    /// Event the featured panel tracks, resolved from its key
    fn featured_event(&self) -> Option<&Event> {
        let key = self.state.featured_key.as_deref()?;
        find_by_key(&self.state.events, key)
    }

    /// Event the detail dialog acts on, resolved from its key
    fn selected_event(&self) -> Option<&Event> {
        let key = self.state.selected_key.as_deref()?;
        find_by_key(&self.state.events, key)
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        // Once the detail dialog is gone, so is the event it was showing
        if !self.dialog.is_visible() {
            self.state.selected_key = None;
        }

        // The list loses focus while a dialog sits above it
        if self.dialog.is_visible() {
            self.event_list.on_blur();
        } else {
            self.event_list.on_focus();
        }

        let today = Local::now().date_naive();
        let rows = build_rows(
            &self.state.events,
            &self.state.filter,
            self.store.liked_events(),
            today,
            &self.config.display.date_format,
        );
        self.event_list.update_data(rows, self.state.events.len(), self.state.loading);
        self.event_list.set_theme(self.theme.clone());
        self.event_list.set_icons(self.icons.clone());
        self.event_list.set_display_config(self.config.display.clone());

        let featured = self.featured_event().map(|event| FeaturedData {
            title: event.title.clone(),
            date_line: featured_date_line(event),
            location: event.location.clone(),
            img: event.img.clone(),
            description: event.description.clone(),
            tags: event.tags.clone(),
        });
        self.featured
            .update_data(featured, self.state.featured_revealed, self.state.countdown_text.clone());
        self.featured.set_theme(self.theme.clone());
        self.featured.set_icons(self.icons.clone());

        let detail = self
            .state
            .selected_key
            .as_deref()
            .and_then(|key| find_by_key(&self.state.events, key))
            .cloned();
        let liked = detail.as_ref().map(|event| self.store.is_liked(&event.key())).unwrap_or(false);
        self.dialog.update_event(detail, liked);
        self.dialog.set_icons(self.icons.clone());

        self.status_bar.update_data(
            self.state.loading,
            self.event_list.is_searching(),
            self.state.filter.clone(),
            self.theme.scheme.toggle_label(),
        );
        self.status_bar.set_theme(self.theme.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('L') => {
                self.logger.log("Global key: 'L' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('S') => {
                self.logger.log("Global key: 'S' - opening subscribe dialog".to_string());
                Action::ShowDialog(DialogType::Subscribe)
            }
            KeyCode::Char('t') => {
                self.logger.log("Global key: 't' - toggling color scheme".to_string());
                Action::ToggleColorScheme
            }
            KeyCode::Char('i') => {
                self.logger.log("Global key: 'i' - cycling icon theme".to_string());
                Action::CycleIconTheme
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::EventsLoaded(events) => {
                let events = prepare_events(events);
                self.logger.log(format!("Events: Loaded {} events", events.len()));
                self.state.events = events;
                self.state.loading = false;
                self.state.loaded_at = Some(Instant::now());
                self.state.featured_key = next_event(&self.state.events, Local::now()).map(Event::key);
                Action::None
            }
            Action::EventsLoadFailed(error) => {
                self.logger.log(format!("Events: Load failed: {}", error));
                log::error!("error fetching events: {error}");
                self.state.loading = false;
                self.state.loaded_at = Some(Instant::now());
                Action::ShowDialog(DialogType::Error(error))
            }
            Action::FilterChanged(filter) => {
                self.state.filter = filter;
                Action::None
            }
            Action::OpenEventDetail(key) => {
                self.logger.log(format!("Events: Opening detail view for '{}'", key));
                self.state.hover = None;
                self.state.selected_key = Some(key.clone());
                Action::ShowDialog(DialogType::EventDetail { event_key: key })
            }
            Action::ToggleLike(key) => match self.store.toggle_like(&key) {
                Ok(liked) => {
                    let verb = if liked { "Liked" } else { "Unliked" };
                    self.logger.log(format!("Likes: {} '{}'", verb, key));
                    Action::None
                }
                Err(e) => {
                    self.logger.log(format!("Likes: Failed to persist like state: {}", e));
                    log::warn!("failed to persist like state: {e}");
                    self.report_storage_error(&e)
                }
            },
            Action::Rsvp => match self.selected_event() {
                Some(event) => {
                    // No RSVP backend; the acknowledgement is the whole flow
                    let title = event.title.clone();
                    self.logger.log(format!("Events: RSVP recorded for '{}'", title));
                    Action::ShowDialog(DialogType::Info(format!("Thanks for RSVPing to {}!", title)))
                }
                None => {
                    log::debug!("rsvp requested with no current selection");
                    Action::None
                }
            },
            Action::AddToCalendar => match self.selected_event() {
                Some(event) => {
                    self.logger.log(format!("Share: Opening Google Calendar for '{}'", event.title));
                    match export::google_calendar_url(event) {
                        Some(url) => self.open_in_browser(&url),
                        None => Action::None,
                    }
                }
                None => {
                    log::debug!("calendar export requested with no current selection");
                    Action::None
                }
            },
            Action::ShareFacebook => match self.selected_event() {
                Some(event) => {
                    self.logger.log(format!("Share: Posting '{}' to Facebook", event.title));
                    let url = export::facebook_share_url(event);
                    self.open_in_browser(&url)
                }
                None => {
                    log::debug!("share requested with no current selection");
                    Action::None
                }
            },
            Action::ShareX => match self.selected_event() {
                Some(event) => {
                    self.logger.log(format!("Share: Posting '{}' to X", event.title));
                    let url = export::x_share_url(event);
                    self.open_in_browser(&url)
                }
                None => {
                    log::debug!("share requested with no current selection");
                    Action::None
                }
            },
            Action::SubscribeEmail(email) => {
                // No mail service behind this; the address is only acknowledged
                self.logger.log(format!("Subscribe: Registered '{}'", email));
                Action::ShowDialog(DialogType::Info(format!("Thanks for subscribing with {}!", email)))
            }
            Action::CountdownTick => {
                self.advance_countdown();
                Action::None
            }
            Action::ToggleColorScheme => {
                let scheme = self.theme.scheme.toggled();
                self.logger.log(format!("Theme: Switching to {:?} scheme", scheme));
                self.theme = Theme::new(scheme);
                if let Err(e) = self.store.set_dark_mode(scheme.is_dark()) {
                    self.logger.log(format!("Theme: Failed to persist scheme: {}", e));
                    log::warn!("failed to persist color scheme: {e}");
                    return self.report_storage_error(&e);
                }
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icons: Switched to {:?} icon theme", self.icons.theme()));
                Action::None
            }
            Action::HoverEvent { key, column, row } => {
                self.state.hover = Some((key, column, row));
                Action::None
            }
            Action::HoverCleared => {
                self.state.hover = None;
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                // Dialog component will handle the actual dialog setup
                action
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                // Dialog component will handle hiding
                action
            }
            Action::None => Action::None,
        }
    }

    fn open_in_browser(&self, url: &str) -> Action {
        match export::open_url(url) {
            Ok(()) => Action::None,
            Err(e) => {
                self.logger.log(format!("Share: Failed to open browser: {}", e));
                Action::ShowDialog(DialogType::Error(format!("Could not open browser: {e}")))
            }
        }
    }

    /// Surface a state-file write failure once; changes keep applying
    /// in memory for the rest of the session
    fn report_storage_error(&mut self, error: &StorageError) -> Action {
        if self.storage_error_reported {
            return Action::None;
        }
        self.storage_error_reported = true;
        Action::ShowDialog(DialogType::Error(format!(
            "Could not write the state file: {}\nLikes and settings will not survive this session.",
            error
        )))
    }

    /// Flip the featured panel visible once the reveal delay has passed
    fn advance_reveal(&mut self) -> bool {
        if self.state.featured_revealed {
            return false;
        }
        match self.state.loaded_at {
            Some(at) if at.elapsed() >= Duration::from_millis(FEATURED_REVEAL_MS) => {
                self.state.featured_revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Advance the countdown by one ticker tick
    fn advance_countdown(&mut self) {
        self.advance_reveal();
        if !self.state.featured_revealed {
            return;
        }

        let target = self.featured_event().and_then(Event::parsed_datetime);
        let Some(target) = target else {
            // Nothing upcoming, the ticker has no more work to do
            self.state.countdown_text = None;
            self.stop_countdown_ticker();
            return;
        };

        let remaining = remaining_seconds(target, Local::now());
        if remaining <= 0 {
            self.state.countdown_text = Some(COUNTDOWN_OVER.to_string());
            if !self.state.countdown_finished {
                self.state.countdown_finished = true;
                self.stop_countdown_ticker();
            }
        } else {
            self.state.countdown_text = Some(format_remaining(remaining));
        }
    }

    fn stop_countdown_ticker(&mut self) {
        if let Some(task_id) = self.countdown_task.take() {
            self.task_manager.cancel_task(task_id);
            self.logger.log("Countdown: Ticker stopped".to_string());
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            if !matches!(action, Action::CountdownTick) {
                self.logger.log(format!("Background: Received action {:?}", action));
            }
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Let the idle tick advance time-based state; true when a redraw is due
    pub fn handle_tick(&mut self) -> bool {
        if self.advance_reveal() {
            self.sync_component_data();
            return true;
        }
        false
    }

    /// Route an action through the components, then apply app-level handling
    pub async fn dispatch_action(&mut self, action: Action) {
        // Process action through component hierarchy
        let action = self.dialog.update(action);
        let action = self.event_list.update(action);

        // Handle app-level actions; dialog requests loop back once
        let follow_up = self.handle_app_action(action).await;
        if !matches!(follow_up, Action::None) {
            let leftover = self.dialog.update(follow_up);
            let _ = self.handle_app_action(leftover).await;
        }

        // Update component data after any changes
        self.sync_component_data();
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Mouse(mouse) => {
                if self.dialog.is_visible() {
                    // Only the dialog sees the mouse while it is open
                    self.dialog.handle_mouse_events(mouse)
                } else {
                    self.event_list.handle_mouse_events(mouse)
                }
            }
            EventType::Key(key) => {
                // Route keyboard events to components or handle globally
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    // List goes first so an active search captures printable keys
                    let list_action = self.event_list.handle_key_events(key);

                    if !matches!(list_action, Action::None) {
                        list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) => {
                // Reflow invalidates the detail view geometry
                self.state.hover = None;
                if matches!(self.dialog.dialog_type, Some(DialogType::EventDetail { .. })) {
                    Action::HideDialog
                } else {
                    Action::None
                }
            }
            EventType::Tick => {
                // Periodic updates arrive through handle_tick
                Action::None
            }
            EventType::Other => Action::None,
        };

        self.dispatch_action(action).await;
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);

        // Return for app-level handling
        self.event_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main_chunks = LayoutManager::main_layout(rect);
        let top_chunks = LayoutManager::top_pane_layout(main_chunks[0], self.config.ui.featured_width);

        // Render components
        self.event_list.render(f, top_chunks[0]);
        self.featured.render(f, top_chunks[1]);
        self.status_bar.render(f, main_chunks[1]);

        // Tooltip floats above the panes while the pointer rests on a row
        if !self.dialog.is_visible() {
            if let Some((key, column, row)) = self.state.hover.clone() {
                if let Some(event) = find_by_key(&self.state.events, &key) {
                    Tooltip::render(f, rect, event, column, row, &self.icons, &self.theme);
                }
            }
        }

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

/// "Friday, October 10, 2025 at 6:00 PM" style line for the featured panel
fn featured_date_line(event: &Event) -> String {
    match (event.parsed_datetime(), event.start_time_12h()) {
        (Some(datetime), Some(time)) => {
            format!("{} at {}", datetime.format("%A, %B %-d, %Y"), time)
        }
        _ => event.date_time.clone(),
    }
}
