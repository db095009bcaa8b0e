use eventist::logger::{Logger, LOG_FILE_NAME};

#[test]
fn test_log_entries_carry_timestamps() {
    let logger = Logger::new();
    logger.log("Test message".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
    // "[HH:MM:SS.mmm] message" shape
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_get_logs_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].contains("third"));
    assert!(logs[2].contains("first"));
}

#[test]
fn test_clear_empties_the_buffer() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();

    clone.log("written through the clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_log_file_path_ends_with_app_file_name() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with(std::path::Path::new("eventist").join(LOG_FILE_NAME)));
}
