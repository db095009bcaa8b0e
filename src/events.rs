//! Event data model and time helpers
//!
//! This module defines the event record deserialized from the events feed
//! and the date/time helpers the UI needs: identity keys, month labels,
//! short dates, 12-hour times, and next-upcoming-event selection.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the events feed (ISO 8601 without timezone)
pub const EVENT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default short date format for list rows ("Oct 5")
pub const SHORT_DATE_FORMAT: &str = "%b %-d";

/// A single event from the events feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub description: String,
    /// Raw timestamp string, kept verbatim because it is half of the
    /// event's identity key
    pub date_time: String,
    pub img: String,
    pub url: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Identity key: raw timestamp + underscore + title.
    ///
    /// Two events sharing both collide and are treated as one for
    /// likes and selection.
    pub fn key(&self) -> String {
        format!("{}_{}", self.date_time, self.title)
    }

    /// Parse the raw timestamp into local time
    pub fn parsed_datetime(&self) -> Option<DateTime<Local>> {
        parse_event_datetime(&self.date_time)
    }

    /// Divider label in "October 2024" form
    pub fn month_label(&self) -> Option<String> {
        self.parsed_datetime().map(|dt| dt.format("%B %Y").to_string())
    }

    /// Short date for list rows, rendered with the given chrono format
    /// (see [`SHORT_DATE_FORMAT`])
    pub fn short_date(&self, format: &str) -> Option<String> {
        self.parsed_datetime().map(|dt| dt.format(format).to_string())
    }

    /// Whether the event falls on the given local date
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.parsed_datetime().map(|dt| dt.date_naive() == date).unwrap_or(false)
    }

    /// 12-hour start time ("6:00 PM") derived from the raw timestamp.
    ///
    /// Returns `None` when the timestamp has no time part.
    pub fn start_time_12h(&self) -> Option<String> {
        let time = self.date_time.split('T').nth(1)?;
        let time = time.strip_suffix(":00").unwrap_or(time);
        convert_to_12_hour(time)
    }
}

/// Parse an event timestamp string into local time
///
/// Tries RFC3339 first, then ISO 8601 without timezone, then the
/// space-separated variant. Returns `None` when nothing matches.
pub fn parse_event_datetime(datetime_str: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        // RFC3339 with timezone (e.g., "2024-10-05T18:00:00Z")
        Some(dt.with_timezone(&Local))
    } else if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(datetime_str, EVENT_DATETIME_FORMAT) {
        // ISO 8601 without timezone (e.g., "2024-10-05T18:00:00")
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        // Space-separated format (e.g., "2024-10-05 18:00:00")
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else {
        None
    }
}

/// Convert a 24-hour "HH:MM" time to "H:MM AM/PM" form
pub fn convert_to_12_hour(time: &str) -> Option<String> {
    let mut parts = time.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute = parts.next()?;

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    Some(format!("{}:{} {}", hour12, minute, suffix))
}

/// Drop events whose timestamp cannot be parsed and sort the rest
/// ascending by start time.
///
/// Called once after load; the list stays sorted for its lifetime.
pub fn prepare_events(mut events: Vec<Event>) -> Vec<Event> {
    events.retain(|event| {
        let ok = event.parsed_datetime().is_some();
        if !ok {
            log::warn!("Dropping event '{}': unparseable dateTime '{}'", event.title, event.date_time);
        }
        ok
    });
    events.sort_by_key(Event::parsed_datetime);
    events
}

/// Find the next upcoming event: the smallest start time at or after `now`
pub fn next_event(events: &[Event], now: DateTime<Local>) -> Option<&Event> {
    events
        .iter()
        .filter_map(|event| event.parsed_datetime().map(|dt| (dt, event)))
        .filter(|(dt, _)| *dt >= now)
        .min_by_key(|(dt, _)| *dt)
        .map(|(_, event)| event)
}

/// Find an event by its identity key
pub fn find_by_key<'a>(events: &'a [Event], key: &str) -> Option<&'a Event> {
    events.iter().find(|event| event.key() == key)
}
