//! Countdown formatting for the featured event panel

use chrono::{DateTime, Local};

/// Shown once the featured event's start time has been reached
pub const COUNTDOWN_OVER: &str = "Event is happening now or already passed!";

/// Whole seconds between now and the target start time (negative when past)
pub fn remaining_seconds(target: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (target - now).num_seconds()
}

/// Render a remaining-seconds value as the countdown line.
///
/// Zero or negative yields the terminal message; otherwise the largest
/// nonzero unit decides the phrasing tier.
pub fn format_remaining(total_seconds: i64) -> String {
    if total_seconds <= 0 {
        return COUNTDOWN_OVER.to_string();
    }

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("Next event starts in {}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else {
        format!("{}m {}s", minutes, seconds)
    }
}
