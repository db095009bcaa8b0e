//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Empty-state Messages
pub const MSG_NO_EVENTS: &str = "No events found.";
pub const MSG_NO_FILTER_MATCHES: &str = "No events match your search.";
pub const MSG_NO_UPCOMING: &str = "No upcoming events.";

// Validation Messages
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'L' or 'q' to close";

// UI Layout Constants
/// Minimum featured panel width in columns
pub const FEATURED_MIN_WIDTH: u16 = 24;
/// Maximum featured panel width in columns
pub const FEATURED_MAX_WIDTH: u16 = 80;
/// Default featured panel width in columns
pub const FEATURED_DEFAULT_WIDTH: u16 = 40;
/// Minimum event list width to preserve usability
pub const LIST_MIN_WIDTH: u16 = 20;

// Tooltip Constants
/// Tooltip box width in columns
pub const TOOLTIP_WIDTH: u16 = 44;
/// Horizontal gap between the cursor and the tooltip box
pub const TOOLTIP_PADDING_X: u16 = 2;
/// Vertical gap between the cursor and the tooltip box
pub const TOOLTIP_PADDING_Y: u16 = 1;
/// Description preview length in the tooltip, in characters
pub const TOOLTIP_PREVIEW_LEN: usize = 80;

// Timing Constants
/// Delay before newly selected featured content becomes visible
pub const FEATURED_REVEAL_MS: u64 = 500;
/// Countdown refresh interval in seconds
pub const COUNTDOWN_TICK_SECS: u64 = 1;
