//! Integration tests for ranker-store
//!
//! These tests exercise the item source and state files on a real filesystem.

use ranker_domain::{propagate, Position, RelationCode, RelationMatrix};
use ranker_store::{read_items, StateFile, StoreError, DEFAULT_SUFFIX};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_items_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.txt");
    fs::write(&path, "red\ngreen\n\nblue\ngreen\n").unwrap();

    let items = read_items(&path).unwrap();
    assert_eq!(items, vec!["red", "green", "blue"]);
}

#[test]
fn test_read_items_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n\n").unwrap();

    assert!(matches!(read_items(&path), Err(StoreError::NoItems(_))));
}

#[test]
fn test_read_items_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = read_items(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_save_and_load_session_state() {
    let dir = TempDir::new().unwrap();
    let items_path = dir.path().join("items.txt");
    let state = StateFile::for_items(&items_path, DEFAULT_SUFFIX);
    assert!(!state.exists());

    let mut matrix = RelationMatrix::new(vec!["a".into(), "b".into(), "c".into()]);
    matrix.set(&Position::new("a", "b"), RelationCode::StrongWin);
    matrix.set(&Position::new("b", "c"), RelationCode::StrongWin);
    let matrix = propagate(&matrix).into_matrix().unwrap();

    state.save(&matrix).unwrap();
    assert!(state.exists());
    assert_eq!(state.load().unwrap(), matrix);

    // No temporary file is left behind
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["items.txt-ranks.json"]);
}

#[test]
fn test_save_overwrites_previous_state() {
    let dir = TempDir::new().unwrap();
    let state = StateFile::new(dir.path().join("state.json"));

    let mut matrix = RelationMatrix::new(vec!["a".into(), "b".into()]);
    state.save(&matrix).unwrap();

    matrix.set(&Position::new("a", "b"), RelationCode::Loss);
    state.save(&matrix).unwrap();

    assert_eq!(state.load().unwrap(), matrix);
}

#[test]
fn test_load_rejects_corrupt_state() {
    let dir = TempDir::new().unwrap();
    let state = StateFile::new(dir.path().join("state.json"));
    fs::write(state.path(), r#"{"items": ["a"], "relations": [1]}"#).unwrap();

    assert!(matches!(state.load(), Err(StoreError::InvalidData(_))));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let state = StateFile::new(dir.path().join("nope").join("state.json"));
    let matrix = RelationMatrix::new(vec!["a".into()]);

    assert!(matches!(state.save(&matrix), Err(StoreError::Io(_))));
}
