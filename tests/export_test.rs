use eventist::events::Event;
use eventist::export::{facebook_share_url, google_calendar_url, x_share_url};

fn sample_event() -> Event {
    Event {
        title: "Makers Fair".to_string(),
        description: "Crafts and stalls".to_string(),
        // UTC timestamp keeps the calendar assertions machine-independent
        date_time: "2024-10-05T18:00:00Z".to_string(),
        img: String::new(),
        url: "https://example.com/fair".to_string(),
        location: "Community Hall".to_string(),
        tags: vec!["crafts".to_string()],
    }
}

#[test]
fn test_google_calendar_url_shape() {
    let url = google_calendar_url(&sample_event()).unwrap();

    assert!(url.starts_with("https://www.google.com/calendar/render?action=TEMPLATE"));
    assert!(url.contains("&text=Makers%20Fair"));
    // One hour entry starting at the event time, in UTC
    assert!(url.contains("&dates=20241005T180000Z/20241005T190000Z"));
    assert!(url.contains("&location=Community%20Hall"));
    assert!(url.ends_with("&sf=true&output=xml"));
}

#[test]
fn test_google_calendar_details_carry_description_and_link() {
    let url = google_calendar_url(&sample_event()).unwrap();
    // Description, newline, event page URL
    assert!(url.contains("&details=Crafts%20and%20stalls%0Ahttps%3A%2F%2Fexample.com%2Ffair"));
}

#[test]
fn test_google_calendar_url_requires_parseable_datetime() {
    let mut event = sample_event();
    event.date_time = "whenever".to_string();
    assert!(google_calendar_url(&event).is_none());
}

#[test]
fn test_facebook_share_url() {
    let url = facebook_share_url(&sample_event());
    assert_eq!(
        url,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Ffair"
    );
}

#[test]
fn test_x_share_url() {
    let url = x_share_url(&sample_event());
    assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
    // Prefilled text is "title - url"
    assert!(url.contains("Makers%20Fair%20-%20https%3A%2F%2Fexample.com%2Ffair"));
}
