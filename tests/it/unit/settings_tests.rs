//! Unit tests for settings loading and saving.

use canvas_cursor::settings::default_settings_path;
use canvas_cursor::{CursorKind, CursorSettings};
use std::fs;
use tempfile::tempdir;

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(CursorSettings::default(), @r###"
    {
      "enabled": true,
      "fallbacks": {
        "drop_target": "alias",
        "dragging": "grabbing",
        "disabled": "default",
        "draggable": "grab",
        "hover": "pointer"
      }
    }
    "###);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = CursorSettings::default();
    settings.enabled = false;
    settings.fallbacks.dragging = CursorKind::Move;
    settings.save(&path).unwrap();

    let loaded = CursorSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.fallbacks.dragging, CursorKind::Move);
    assert!(fs::read_to_string(&path).unwrap().contains(r#""dragging": "move""#));
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempdir().unwrap();
    assert!(CursorSettings::load(&dir.path().join("missing.json")).is_err());
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempdir().unwrap();
    let settings = CursorSettings::load_or_default(&dir.path().join("missing.json"));
    assert_eq!(settings, CursorSettings::default());
}

#[test]
fn test_load_or_default_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let settings = CursorSettings::load_or_default(&path);
    assert_eq!(settings, CursorSettings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"fallbacks": {"drop_target": "copy"}}"#).unwrap();

    let settings = CursorSettings::load(&path).unwrap();
    assert!(settings.enabled);
    assert_eq!(settings.fallbacks.drop_target, CursorKind::Copy);
    assert_eq!(settings.fallbacks.hover, CursorKind::Pointer);
}

#[test]
fn test_empty_fallback_fails_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"fallbacks": {"hover": ""}}"#).unwrap();

    let err = CursorSettings::load(&path).unwrap_err();
    assert!(err.to_string().contains("Unknown cursor name"), "{err}");
    assert_eq!(CursorSettings::load_or_default(&path), CursorSettings::default());
}

#[test]
fn test_custom_image_fallback_fails_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"enabled": false, "fallbacks": {"dragging": "cursors/fist.png"}}"#)
        .unwrap();

    assert!(CursorSettings::load(&path).is_err());
    // Whole file is rejected, not just the bad key
    let settings = CursorSettings::load_or_default(&path);
    assert!(settings.enabled);
    assert_eq!(settings.fallbacks.dragging, CursorKind::Grabbing);
}

#[test]
fn test_default_path_layout() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("canvas-cursor/settings.json"));
    }
}
