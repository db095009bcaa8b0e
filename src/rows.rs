//! Render-ready row derivation for the event list
//!
//! Pure functions from the loaded events plus UI state (filter text, like
//! map, today's date) to the divider/event row sequence the list paints.
//! Keeping this free of terminal types lets the grouping, filtering and
//! dedup rules be tested without a backend.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::events::Event;

/// One visual row of the event list
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// "October 2024" style group divider
    MonthDivider { label: String },
    /// An event row; `event_index` points into the loaded events slice
    Event {
        event_index: usize,
        key: String,
        short_date: String,
        title: String,
        tags: Vec<String>,
        liked: bool,
        today: bool,
    },
}

/// Case-insensitive filter match over title, description, tags and the
/// raw timestamp string. An empty filter matches everything.
pub fn event_matches_filter(event: &Event, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        event.title,
        event.description,
        event.tags.join(" "),
        event.date_time
    )
    .to_lowercase();
    haystack.contains(&filter.to_lowercase())
}

/// Build the interleaved divider/event row sequence.
///
/// `events` must already be sorted by start time. Every matching event
/// emits its own month divider first; a dedup pass then keeps the first
/// divider per label, so each label appears exactly once and every event
/// row sits under the divider carrying its own month and year.
pub fn build_rows(
    events: &[Event],
    filter: &str,
    likes: &HashMap<String, bool>,
    today: NaiveDate,
    date_format: &str,
) -> Vec<Row> {
    let mut rows = Vec::new();

    for (event_index, event) in events.iter().enumerate() {
        if !event_matches_filter(event, filter) {
            continue;
        }
        // Events with unparseable timestamps are dropped at load time,
        // so these misses only guard against future call sites
        let Some(label) = event.month_label() else { continue };
        let Some(short_date) = event.short_date(date_format) else { continue };

        let key = event.key();
        let liked = likes.get(&key).copied().unwrap_or(false);

        rows.push(Row::MonthDivider { label });
        rows.push(Row::Event {
            event_index,
            key,
            short_date,
            title: event.title.clone(),
            tags: event.tags.clone(),
            liked,
            today: event.is_on(today),
        });
    }

    dedup_dividers(rows)
}

/// Keep only the first divider carrying each label; event rows fall under
/// the surviving divider
fn dedup_dividers(rows: Vec<Row>) -> Vec<Row> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(rows.len());

    for row in rows {
        match &row {
            Row::MonthDivider { label } => {
                if seen.insert(label.clone()) {
                    deduped.push(row);
                }
            }
            Row::Event { .. } => deduped.push(row),
        }
    }

    deduped
}

/// Number of selectable (event) rows
pub fn event_row_count(rows: &[Row]) -> usize {
    rows.iter().filter(|row| matches!(row, Row::Event { .. })).count()
}

/// Rendered position of the nth event row, skipping dividers
pub fn rendered_index(rows: &[Row], event_row: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches!(row, Row::Event { .. }))
        .nth(event_row)
        .map(|(rendered, _)| rendered)
}

/// Event-row ordinal at a rendered position, or `None` on a divider
pub fn event_row_at(rows: &[Row], rendered: usize) -> Option<usize> {
    if rendered >= rows.len() {
        return None;
    }
    match rows[rendered] {
        Row::MonthDivider { .. } => None,
        Row::Event { .. } => Some(
            rows[..rendered]
                .iter()
                .filter(|row| matches!(row, Row::Event { .. }))
                .count(),
        ),
    }
}

/// The nth event row itself
pub fn nth_event_row(rows: &[Row], event_row: usize) -> Option<&Row> {
    rows.iter()
        .filter(|row| matches!(row, Row::Event { .. }))
        .nth(event_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SHORT_DATE_FORMAT;

    fn event(title: &str, date_time: &str, tags: &[&str]) -> Event {
        Event {
            title: title.to_string(),
            description: format!("{} description", title),
            date_time: date_time.to_string(),
            img: String::new(),
            url: String::new(),
            location: "Community Hall".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            event("Makers Fair", "2024-10-05T18:00:00", &["crafts"]),
            event("Star Party", "2024-10-19T20:30:00", &["astronomy", "outdoors"]),
            event("Harvest Potluck", "2024-11-02T12:00:00", &["food"]),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
    }

    #[test]
    fn test_divider_per_month() {
        let rows = build_rows(&sample_events(), "", &HashMap::new(), today(), SHORT_DATE_FORMAT);

        let dividers: Vec<_> = rows
            .iter()
            .filter_map(|row| match row {
                Row::MonthDivider { label } => Some(label.as_str()),
                Row::Event { .. } => None,
            })
            .collect();
        assert_eq!(dividers, vec!["October 2024", "November 2024"]);
        assert_eq!(event_row_count(&rows), 3);

        // Both October events sit under the single October divider
        assert_eq!(rendered_index(&rows, 0), Some(1));
        assert_eq!(rendered_index(&rows, 1), Some(2));
        assert_eq!(rendered_index(&rows, 2), Some(4));
    }

    #[test]
    fn test_filter_matches_title_description_tags_and_date() {
        let events = sample_events();

        assert!(event_matches_filter(&events[0], "makers"));
        assert!(event_matches_filter(&events[0], "MAKERS"));
        assert!(event_matches_filter(&events[1], "star party description"));
        assert!(event_matches_filter(&events[1], "outdoors"));
        assert!(event_matches_filter(&events[2], "2024-11"));
        assert!(!event_matches_filter(&events[0], "astronomy"));
        assert!(event_matches_filter(&events[0], ""));
    }

    #[test]
    fn test_filtering_rebuilds_dividers() {
        let rows = build_rows(&sample_events(), "food", &HashMap::new(), today(), SHORT_DATE_FORMAT);

        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], Row::MonthDivider { label } if label == "November 2024"));
        assert!(matches!(&rows[1], Row::Event { title, .. } if title == "Harvest Potluck"));
    }

    #[test]
    fn test_no_matches_yields_no_rows() {
        let rows = build_rows(&sample_events(), "pottery", &HashMap::new(), today(), SHORT_DATE_FORMAT);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_likes_and_today_flags() {
        let events = sample_events();
        let mut likes = HashMap::new();
        likes.insert(events[1].key(), true);

        let rows = build_rows(&events, "", &likes, today(), SHORT_DATE_FORMAT);

        match nth_event_row(&rows, 0) {
            Some(Row::Event { liked, today, .. }) => {
                assert!(!liked);
                assert!(today);
            }
            other => panic!("expected event row, got {:?}", other),
        }
        match nth_event_row(&rows, 1) {
            Some(Row::Event { liked, today, .. }) => {
                assert!(liked);
                assert!(!today);
            }
            other => panic!("expected event row, got {:?}", other),
        }
    }

    #[test]
    fn test_unliked_entry_in_map_stays_unliked() {
        let events = sample_events();
        let mut likes = HashMap::new();
        likes.insert(events[0].key(), false);

        let rows = build_rows(&events, "", &likes, today(), SHORT_DATE_FORMAT);
        assert!(matches!(nth_event_row(&rows, 0), Some(Row::Event { liked: false, .. })));
    }

    #[test]
    fn test_event_row_at_maps_rendered_positions() {
        let rows = build_rows(&sample_events(), "", &HashMap::new(), today(), SHORT_DATE_FORMAT);

        // Layout: divider, event, event, divider, event
        assert_eq!(event_row_at(&rows, 0), None);
        assert_eq!(event_row_at(&rows, 1), Some(0));
        assert_eq!(event_row_at(&rows, 2), Some(1));
        assert_eq!(event_row_at(&rows, 3), None);
        assert_eq!(event_row_at(&rows, 4), Some(2));
        assert_eq!(event_row_at(&rows, 5), None);
    }

    #[test]
    fn test_short_date_uses_configured_format() {
        let rows = build_rows(&sample_events(), "", &HashMap::new(), today(), "%d/%m");
        match nth_event_row(&rows, 0) {
            Some(Row::Event { short_date, .. }) => assert_eq!(short_date, "05/10"),
            other => panic!("expected event row, got {:?}", other),
        }
    }
}
