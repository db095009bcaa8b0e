use eventist::storage::StateStore;

fn temp_state_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("state.json")
}

#[test]
fn test_missing_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::load(temp_state_path(&dir));

    assert!(!store.is_liked("2024-10-05T18:00:00_Makers Fair"));
    assert!(store.liked_events().is_empty());
    assert!(!store.dark_mode());
}

#[test]
fn test_toggle_like_flips_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let key = "2024-10-05T18:00:00_Makers Fair";

    let mut store = StateStore::load(temp_state_path(&dir));
    assert!(store.toggle_like(key).unwrap());
    assert!(store.is_liked(key));

    // A fresh load sees the persisted like
    let mut reloaded = StateStore::load(temp_state_path(&dir));
    assert!(reloaded.is_liked(key));

    // Toggling again unlikes
    assert!(!reloaded.toggle_like(key).unwrap());
    assert!(!reloaded.is_liked(key));

    let reloaded_again = StateStore::load(temp_state_path(&dir));
    assert!(!reloaded_again.is_liked(key));
}

#[test]
fn test_likes_are_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = StateStore::load(temp_state_path(&dir));

    store.toggle_like("a_First").unwrap();
    assert!(store.is_liked("a_First"));
    assert!(!store.is_liked("b_Second"));
    assert_eq!(store.liked_events().len(), 1);
}

#[test]
fn test_dark_mode_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = StateStore::load(temp_state_path(&dir));
    store.set_dark_mode(true).unwrap();

    let reloaded = StateStore::load(temp_state_path(&dir));
    assert!(reloaded.dark_mode());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_state_path(&dir);
    std::fs::write(&path, "{not json at all").unwrap();

    let store = StateStore::load(path);
    assert!(store.liked_events().is_empty());
    assert!(!store.dark_mode());
}

#[test]
fn test_state_file_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_state_path(&dir);

    let mut store = StateStore::load(path.clone());
    store.toggle_like("a_First").unwrap();
    store.set_dark_mode(true).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"likedEvents\""));
    assert!(content.contains("\"darkMode\": true"));
}

#[test]
fn test_partial_state_file_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_state_path(&dir);
    std::fs::write(&path, r#"{"darkMode": true}"#).unwrap();

    let store = StateStore::load(path);
    assert!(store.dark_mode());
    assert!(store.liked_events().is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("state.json");

    let mut store = StateStore::load(path.clone());
    store.toggle_like("a_First").unwrap();

    assert!(path.exists());
}
