//! Calendar-export and share link building
//!
//! Builds the Google Calendar template URL and the social share intents
//! for an event, then hands them to the system browser.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, Utc};
use urlencoding::encode;

use crate::events::Event;

/// Timestamp format Google Calendar expects for UTC times
const GCAL_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Calendar entries get a fixed one-hour duration; the feed carries no end times
const EVENT_DURATION_HOURS: i64 = 1;

fn gcal_timestamp(dt: DateTime<Local>) -> String {
    dt.with_timezone(&Utc).format(GCAL_TIMESTAMP_FORMAT).to_string()
}

/// Google Calendar "render" URL for an event.
///
/// The entry spans one hour from the event's start time; the details field
/// carries the description with the event page URL on its second line.
/// Returns `None` when the event's timestamp cannot be parsed.
pub fn google_calendar_url(event: &Event) -> Option<String> {
    let start = event.parsed_datetime()?;
    let end = start + Duration::hours(EVENT_DURATION_HOURS);
    let details = format!("{}\n{}", event.description, event.url);

    Some(format!(
        "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}&sf=true&output=xml",
        encode(&event.title),
        gcal_timestamp(start),
        gcal_timestamp(end),
        encode(&details),
        encode(&event.location),
    ))
}

/// Facebook sharer URL for an event's page
pub fn facebook_share_url(event: &Event) -> String {
    format!("https://www.facebook.com/sharer/sharer.php?u={}", encode(&event.url))
}

/// X (Twitter) intent URL with "title - url" as the prefilled text
pub fn x_share_url(event: &Event) -> String {
    let text = format!("{} - {}", event.title, event.url);
    format!("https://twitter.com/intent/tweet?text={}", encode(&text))
}

/// Open a link in the system browser
pub fn open_url(url: &str) -> Result<()> {
    opener::open(url).with_context(|| format!("Failed to open {}", url))
}
