//! Replay script integration tests.

use canvas_cursor::replay::{ReplayScript, replay};
use canvas_cursor::{Cursor, CursorError, CursorKind};
use std::fs;
use tempfile::tempdir;

const GESTURE_SCRIPT: &str = r#"{
    "objects": {
        "card": { "kind": "plain", "draggable": true },
        "bin": { "kind": "plain", "cursor_drop": "copy" },
        "grid": { "kind": "instanced", "instances": [true, false, true] }
    },
    "samples": [
        { "hovered": "card" },
        { "hovered": "card" },
        { "hovered": "card", "dragged": "card" },
        { "hovered": "bin", "dragged": "card", "drop_target": "bin" },
        { "hovered": "grid", "hovered_instance": 0 },
        { "hovered": "grid", "hovered_instance": 1 },
        { "hovered": "grid", "hovered_instance": 2 },
        {},
        { "hovered": "card", "enabled": false }
    ]
}"#;

#[test]
fn test_replay_gesture() {
    let script: ReplayScript = serde_json::from_str(GESTURE_SCRIPT).unwrap();
    let report = replay(script).unwrap();

    assert_eq!(
        report.writes,
        vec!["grab", "grabbing", "copy", "pointer", "default", "pointer"]
    );
    assert_eq!(report.final_cursor, Some(Cursor::Symbolic(CursorKind::Pointer)));
    assert_eq!(report.stats.evaluations, 7);
    assert_eq!(report.stats.writes, 6);
    assert_eq!(report.stats.unchanged, 1);
}

#[test]
fn test_replay_uses_script_settings() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "settings": { "fallbacks": { "hover": "cell" } },
            "objects": { "label": { "kind": "plain" } },
            "samples": [ { "hovered": "label" } ]
        }"#,
    )
    .unwrap();

    let report = replay(script).unwrap();
    assert_eq!(report.writes, vec!["cell"]);
}

#[test]
fn test_replay_unknown_object() {
    let script: ReplayScript = serde_json::from_str(
        r#"{ "objects": {}, "samples": [ { "hovered": "ghost" } ] }"#,
    )
    .unwrap();

    let err = replay(script).unwrap_err();
    assert!(matches!(err, CursorError::UnknownObject(id) if id == "ghost"));
}

#[test]
fn test_replay_instance_on_plain_object() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "objects": { "card": { "kind": "plain" } },
            "samples": [ { "hovered": "card", "hovered_instance": 0 } ]
        }"#,
    )
    .unwrap();

    assert!(matches!(replay(script), Err(CursorError::NotInstanced(_))));
}

#[test]
fn test_replay_instance_out_of_range() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "objects": { "grid": { "kind": "instanced", "instances": [true] } },
            "samples": [ { "hovered": "grid", "hovered_instance": 3 } ]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        replay(script),
        Err(CursorError::InstanceOutOfRange { index: 3, count: 1 })
    ));
}

#[test]
fn test_replay_hovered_instance_is_per_sample() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "objects": { "grid": { "kind": "instanced", "instances": [true, true] } },
            "samples": [
                { "hovered": "grid", "hovered_instance": 0 },
                { "hovered": "grid" },
                { "hovered": "grid", "hovered_instance": 1 }
            ]
        }"#,
    )
    .unwrap();

    let report = replay(script).unwrap();
    assert_eq!(report.writes, vec!["pointer", "default", "pointer"]);
}

#[test]
fn test_script_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.json");
    fs::write(&path, GESTURE_SCRIPT).unwrap();

    let script = ReplayScript::from_path(&path).unwrap();
    assert_eq!(script.objects.len(), 3);
    assert_eq!(script.samples.len(), 9);
}
