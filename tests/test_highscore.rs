use std::fs;

use space_explorer::error::GameError;
use space_explorer::highscore::HighScoreStore;

use tempfile::tempdir;

#[test]
fn missing_file_reads_as_zero() {
    let dir = tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("high_score.json"));
    assert_eq!(store.load().unwrap(), 0);
    // Loading never creates the file
    assert!(!store.path().exists());
}

#[test]
fn saved_score_loads_back() {
    let dir = tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("high_score.json"));
    store.save(4321).unwrap();
    assert_eq!(store.load().unwrap(), 4321);

    let text = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["high_score"], 4321);
}

#[test]
fn save_overwrites_previous_record() {
    let dir = tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("high_score.json"));
    store.save(900).unwrap();
    store.save(150).unwrap();
    assert_eq!(store.load().unwrap(), 150);
}

#[test]
fn existing_file_from_elsewhere_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, "{ \"high_score\": 75 }\n").unwrap();
    assert_eq!(HighScoreStore::new(&path).load().unwrap(), 75);
}

#[test]
fn empty_object_defaults_to_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, "{}").unwrap();
    assert_eq!(HighScoreStore::new(&path).load().unwrap(), 0);
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, "not json at all").unwrap();

    let err = HighScoreStore::new(&path).load().unwrap_err();
    assert!(matches!(err, GameError::Parse { .. }), "got {err:?}");
    assert!(err.to_string().contains("high_score.json"));
}

#[test]
fn negative_score_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, r#"{"high_score": -5}"#).unwrap();
    assert!(matches!(
        HighScoreStore::new(&path).load(),
        Err(GameError::Parse { .. })
    ));
}

#[test]
fn unwritable_location_is_an_io_error() {
    let dir = tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("missing_dir").join("high_score.json"));
    assert!(matches!(store.save(10), Err(GameError::Io { .. })));
}
