use std::sync::Arc;

use async_trait::async_trait;

use eventist::events::Event;
use eventist::source::{EventSource, FileSource, SourceError};
use eventist::ui::core::{Action, EventHandler, TaskManager};

struct StubSource {
    events: Vec<Event>,
}

#[async_trait]
impl EventSource for StubSource {
    fn source_type(&self) -> &str {
        "stub"
    }

    async fn load_events(&self) -> Result<Vec<Event>, SourceError> {
        Ok(self.events.clone())
    }
}

struct FailingSource;

#[async_trait]
impl EventSource for FailingSource {
    fn source_type(&self) -> &str {
        "stub"
    }

    async fn load_events(&self) -> Result<Vec<Event>, SourceError> {
        Err(SourceError::NotFound("events.json".to_string()))
    }
}

fn sample_event() -> Event {
    Event {
        title: "Makers Fair".to_string(),
        description: "Crafts and stalls".to_string(),
        date_time: "2024-10-05T18:00:00".to_string(),
        img: String::new(),
        url: String::new(),
        location: "Community Hall".to_string(),
        tags: Vec::new(),
    }
}

#[tokio::test]
async fn test_render_gate_waits_sixteen_millis() {
    let mut event_handler = EventHandler::new();

    // Freshly created, the gate is closed
    assert!(!event_handler.should_render());

    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}

#[tokio::test]
async fn test_events_load_arrives_on_the_action_channel() {
    let (mut task_manager, mut rx) = TaskManager::new();
    let source = Arc::new(StubSource {
        events: vec![sample_event()],
    });

    task_manager.spawn_events_load(source);
    assert!(task_manager.is_loading());
    assert_eq!(task_manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::EventsLoaded(events)) => {
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].title, "Makers Fair");
        }
        other => panic!("expected EventsLoaded, got {:?}", other),
    }

    // The finished task gets swept on the next cleanup pass
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    let completed = task_manager.cleanup_finished_tasks();
    assert_eq!(completed.len(), 1);
    assert!(completed[0].1.starts_with("Loading events"));
    assert!(!task_manager.is_loading());
    assert_eq!(task_manager.task_count(), 0);
}

#[tokio::test]
async fn test_failed_load_reports_the_error() {
    let (mut task_manager, mut rx) = TaskManager::new();

    task_manager.spawn_events_load(Arc::new(FailingSource));

    match rx.recv().await {
        Some(Action::EventsLoadFailed(message)) => {
            assert!(message.contains("events.json"));
        }
        other => panic!("expected EventsLoadFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_countdown_ticker_fires_immediately_and_cancels() {
    let (mut task_manager, mut rx) = TaskManager::new();

    let ticker_id = task_manager.spawn_countdown_ticker();
    // The ticker does not count as a feed load
    assert!(!task_manager.is_loading());

    match rx.recv().await {
        Some(Action::CountdownTick) => {}
        other => panic!("expected CountdownTick, got {:?}", other),
    }

    assert!(task_manager.cancel_task(ticker_id));
    assert_eq!(task_manager.task_count(), 0);
    // Cancelling an unknown id is a no-op
    assert!(!task_manager.cancel_task(ticker_id));
}

#[tokio::test]
async fn test_cancel_all_tasks_empties_the_manager() {
    let (mut task_manager, _rx) = TaskManager::new();

    task_manager.spawn_countdown_ticker();
    task_manager.spawn_events_load(Arc::new(StubSource { events: Vec::new() }));
    assert_eq!(task_manager.task_count(), 2);

    task_manager.cancel_all_tasks();
    assert_eq!(task_manager.task_count(), 0);
}

#[tokio::test]
async fn test_file_source_reads_a_feed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"[{
            "title": "Makers Fair",
            "description": "Crafts and stalls",
            "dateTime": "2024-10-05T18:00:00",
            "img": "",
            "url": "",
            "location": "Community Hall"
        }]"#,
    )
    .unwrap();

    let source = FileSource::new(path);
    assert_eq!(source.source_type(), "file");

    let events = source.load_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Makers Fair");
}

#[tokio::test]
async fn test_file_source_distinguishes_missing_and_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let missing = FileSource::new(dir.path().join("absent.json"));
    assert!(matches!(missing.load_events().await, Err(SourceError::NotFound(_))));

    let invalid_path = dir.path().join("broken.json");
    std::fs::write(&invalid_path, "not json").unwrap();
    let invalid = FileSource::new(invalid_path);
    assert!(matches!(invalid.load_events().await, Err(SourceError::InvalidData(_))));
}
