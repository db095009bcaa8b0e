use crate::events::Event;

#[derive(Debug, Clone)]
pub enum Action {
    // Filtering
    FilterChanged(String),

    // Event operations
    OpenEventDetail(String),
    ToggleLike(String),
    // Act on whichever event the detail dialog currently shows; once the
    // dialog is dismissed these resolve to nothing
    Rsvp,
    AddToCalendar,
    ShareFacebook,
    ShareX,
    SubscribeEmail(String),

    // Hover tooltip
    HoverEvent {
        key: String,
        column: u16,
        row: u16,
    },
    HoverCleared,

    // Background data
    EventsLoaded(Vec<Event>),
    EventsLoadFailed(String),
    CountdownTick,

    // UI operations
    ToggleColorScheme,
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    EventDetail {
        event_key: String,
    },
    Subscribe,
    Error(String),
    Info(String),
    Help,
    Logs,
}
