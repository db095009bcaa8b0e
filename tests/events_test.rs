use chrono::{Datelike, Local, TimeZone, Timelike, Utc};

use eventist::events::{
    convert_to_12_hour, find_by_key, next_event, parse_event_datetime, prepare_events, Event, SHORT_DATE_FORMAT,
};

fn event(title: &str, date_time: &str) -> Event {
    Event {
        title: title.to_string(),
        description: String::new(),
        date_time: date_time.to_string(),
        img: String::new(),
        url: String::new(),
        location: String::new(),
        tags: Vec::new(),
    }
}

#[test]
fn test_parse_naive_iso_datetime() {
    let parsed = parse_event_datetime("2024-10-05T18:00:00").unwrap();
    assert_eq!(parsed.year(), 2024);
    assert_eq!(parsed.month(), 10);
    assert_eq!(parsed.day(), 5);
    assert_eq!(parsed.hour(), 18);
    assert_eq!(parsed.minute(), 0);
}

#[test]
fn test_parse_rfc3339_datetime() {
    let parsed = parse_event_datetime("2024-10-05T18:00:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 10, 5, 18, 0, 0).unwrap());

    let offset = parse_event_datetime("2024-10-05T18:00:00+02:00").unwrap();
    assert_eq!(offset, Utc.with_ymd_and_hms(2024, 10, 5, 16, 0, 0).unwrap());
}

#[test]
fn test_parse_space_separated_datetime() {
    let parsed = parse_event_datetime("2024-10-05 18:00:00").unwrap();
    assert_eq!(parsed.hour(), 18);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_event_datetime("not a date").is_none());
    assert!(parse_event_datetime("2024-10-05").is_none());
    assert!(parse_event_datetime("").is_none());
}

#[test]
fn test_convert_to_12_hour() {
    assert_eq!(convert_to_12_hour("18:00").unwrap(), "6:00 PM");
    assert_eq!(convert_to_12_hour("00:30").unwrap(), "12:30 AM");
    assert_eq!(convert_to_12_hour("12:05").unwrap(), "12:05 PM");
    assert_eq!(convert_to_12_hour("9:05").unwrap(), "9:05 AM");
    assert_eq!(convert_to_12_hour("11:59").unwrap(), "11:59 AM");
    assert!(convert_to_12_hour("six thirty").is_none());
    assert!(convert_to_12_hour("18").is_none());
}

#[test]
fn test_start_time_12h() {
    assert_eq!(event("A", "2024-10-05T18:00:00").start_time_12h().unwrap(), "6:00 PM");
    assert_eq!(event("A", "2024-10-05T08:30:00").start_time_12h().unwrap(), "8:30 AM");
    // No time part means no 12-hour rendering
    assert!(event("A", "2024-10-05").start_time_12h().is_none());
}

#[test]
fn test_event_key_is_datetime_underscore_title() {
    let e = event("Makers Fair", "2024-10-05T18:00:00");
    assert_eq!(e.key(), "2024-10-05T18:00:00_Makers Fair");
}

#[test]
fn test_month_label_and_short_date() {
    let e = event("A", "2024-10-05T18:00:00");
    assert_eq!(e.month_label().unwrap(), "October 2024");
    assert_eq!(e.short_date(SHORT_DATE_FORMAT).unwrap(), "Oct 5");
}

#[test]
fn test_prepare_events_drops_unparseable_and_sorts() {
    let events = vec![
        event("Later", "2024-11-02T12:00:00"),
        event("Broken", "whenever"),
        event("Sooner", "2024-10-05T18:00:00"),
    ];

    let prepared = prepare_events(events);
    let titles: Vec<_> = prepared.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Sooner", "Later"]);
}

#[test]
fn test_next_event_picks_first_at_or_after_now() {
    let events = prepare_events(vec![
        event("Past", "2024-10-01T10:00:00"),
        event("Soon", "2024-10-06T10:00:00"),
        event("Later", "2024-10-20T10:00:00"),
    ]);

    let now = Local.with_ymd_and_hms(2024, 10, 5, 12, 0, 0).unwrap();
    assert_eq!(next_event(&events, now).unwrap().title, "Soon");

    // An event starting exactly now still counts as upcoming
    let exactly = Local.with_ymd_and_hms(2024, 10, 6, 10, 0, 0).unwrap();
    assert_eq!(next_event(&events, exactly).unwrap().title, "Soon");

    // Nothing upcoming once every start time has passed
    let after_all = Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert!(next_event(&events, after_all).is_none());
}

#[test]
fn test_find_by_key() {
    let events = vec![event("A", "2024-10-05T18:00:00"), event("B", "2024-10-06T18:00:00")];

    assert_eq!(find_by_key(&events, "2024-10-06T18:00:00_B").unwrap().title, "B");
    assert!(find_by_key(&events, "2024-10-06T18:00:00_C").is_none());
}

#[test]
fn test_event_deserializes_camel_case_with_optional_tags() {
    let json = r#"{
        "title": "Makers Fair",
        "description": "Crafts and stalls",
        "dateTime": "2024-10-05T18:00:00",
        "img": "https://example.com/fair.jpg",
        "url": "https://example.com/fair",
        "location": "Community Hall"
    }"#;

    let e: Event = serde_json::from_str(json).unwrap();
    assert_eq!(e.title, "Makers Fair");
    assert_eq!(e.date_time, "2024-10-05T18:00:00");
    assert!(e.tags.is_empty());

    let with_tags = r#"{
        "title": "Star Party",
        "description": "Telescopes welcome",
        "dateTime": "2024-10-19T20:30:00",
        "img": "",
        "url": "",
        "location": "Hilltop Field",
        "tags": ["astronomy", "outdoors"]
    }"#;

    let e: Event = serde_json::from_str(with_tags).unwrap();
    assert_eq!(e.tags, vec!["astronomy", "outdoors"]);
}
