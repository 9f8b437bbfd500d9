//! Unit tests for cursor values.

use canvas_cursor::{Cursor, CursorKind};

#[test]
fn test_every_keyword_is_symbolic() {
    for kind in CursorKind::ALL {
        let cursor = Cursor::parse(kind.as_str());
        assert!(cursor.is_symbolic(), "{} should be symbolic", kind);
        assert_eq!(cursor.style_value(), kind.as_str());
    }
}

#[test]
fn test_keyword_count() {
    assert_eq!(CursorKind::ALL.len(), 36);
}

#[test]
fn test_non_keywords_are_custom() {
    for value in ["hand", "Pointer", "url(x.png)", "/cursors/a.cur", ""] {
        assert!(!Cursor::parse(value).is_symbolic(), "{:?} should be custom", value);
    }
}

#[test]
fn test_custom_style_value() {
    let cursor = Cursor::parse("data/cursors/pen.png");
    assert_eq!(cursor.style_value(), "url(data/cursors/pen.png), default");
    assert_eq!(cursor.to_string(), "data/cursors/pen.png");
}

#[test]
fn test_serializes_as_string() {
    let symbolic = serde_json::to_string(&Cursor::from(CursorKind::NsResize)).unwrap();
    assert_eq!(symbolic, "\"ns-resize\"");

    let custom: Cursor = serde_json::from_str("\"img/a.png\"").unwrap();
    assert_eq!(custom, Cursor::Custom("img/a.png".to_string()));

    let parsed: Cursor = serde_json::from_str("\"zoom-out\"").unwrap();
    assert_eq!(parsed, Cursor::Symbolic(CursorKind::ZoomOut));
}
