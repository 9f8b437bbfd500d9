//! Cursor values.
//!
//! A cursor is either one of the closed set of symbolic CSS cursor keywords
//! or an arbitrary string naming a custom cursor image (URL or path).
//! Symbolic names go to the surface verbatim; custom images are wrapped in
//! `url(...)` with a symbolic fallback so the surface degrades gracefully
//! when the image fails to load.

use crate::constants::CUSTOM_CURSOR_FALLBACK;
use crate::error::CursorError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Symbolic Cursors
// ============================================================================

/// Platform cursor keywords accepted verbatim by the display surface.
///
/// Serialized as its keyword; deserializing anything outside the set fails
/// with `CursorError::UnknownCursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CursorKind {
    Auto,
    Default,
    None,
    ContextMenu,
    Help,
    Pointer,
    Progress,
    Wait,
    Cell,
    Crosshair,
    Text,
    VerticalText,
    Alias,
    Copy,
    Move,
    NoDrop,
    NotAllowed,
    Grab,
    Grabbing,
    AllScroll,
    ColResize,
    RowResize,
    NResize,
    EResize,
    SResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    ZoomIn,
    ZoomOut,
}

/// Lookup table from keyword to kind, built on first use
static CURSOR_NAMES: Lazy<HashMap<&'static str, CursorKind>> = Lazy::new(|| {
    CursorKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect()
});

impl CursorKind {
    /// Every symbolic cursor, in keyword-table order
    pub const ALL: [CursorKind; 36] = [
        Self::Auto,
        Self::Default,
        Self::None,
        Self::ContextMenu,
        Self::Help,
        Self::Pointer,
        Self::Progress,
        Self::Wait,
        Self::Cell,
        Self::Crosshair,
        Self::Text,
        Self::VerticalText,
        Self::Alias,
        Self::Copy,
        Self::Move,
        Self::NoDrop,
        Self::NotAllowed,
        Self::Grab,
        Self::Grabbing,
        Self::AllScroll,
        Self::ColResize,
        Self::RowResize,
        Self::NResize,
        Self::EResize,
        Self::SResize,
        Self::WResize,
        Self::NeResize,
        Self::NwResize,
        Self::SeResize,
        Self::SwResize,
        Self::EwResize,
        Self::NsResize,
        Self::NeswResize,
        Self::NwseResize,
        Self::ZoomIn,
        Self::ZoomOut,
    ];

    /// The keyword written to the surface
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Default => "default",
            Self::None => "none",
            Self::ContextMenu => "context-menu",
            Self::Help => "help",
            Self::Pointer => "pointer",
            Self::Progress => "progress",
            Self::Wait => "wait",
            Self::Cell => "cell",
            Self::Crosshair => "crosshair",
            Self::Text => "text",
            Self::VerticalText => "vertical-text",
            Self::Alias => "alias",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::NoDrop => "no-drop",
            Self::NotAllowed => "not-allowed",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::AllScroll => "all-scroll",
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
            Self::NResize => "n-resize",
            Self::EResize => "e-resize",
            Self::SResize => "s-resize",
            Self::WResize => "w-resize",
            Self::NeResize => "ne-resize",
            Self::NwResize => "nw-resize",
            Self::SeResize => "se-resize",
            Self::SwResize => "sw-resize",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
            Self::NeswResize => "nesw-resize",
            Self::NwseResize => "nwse-resize",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }

    /// Set membership test. Exact, case-sensitive match.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        CURSOR_NAMES.get(name).copied()
    }
}

impl FromStr for CursorKind {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CursorError::UnknownCursor(s.to_string()))
    }
}

impl TryFrom<String> for CursorKind {
    type Error = CursorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CursorKind> for String {
    fn from(kind: CursorKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Cursor Values
// ============================================================================

/// A cursor to show: a symbolic keyword or a custom image reference.
///
/// Build one with [`Cursor::parse`] (or `From<&str>`), which picks
/// `Symbolic` whenever the string is a member of the keyword set. Equality
/// is by value, so two textually identical custom cursors compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cursor {
    Symbolic(CursorKind),
    Custom(String),
}

impl Cursor {
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        match CursorKind::from_name(&value) {
            Some(kind) => Self::Symbolic(kind),
            None => Self::Custom(value),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic(_))
    }

    /// True for an empty custom string, which counts as "not set" for
    /// hover overrides
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Custom(s) if s.is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbolic(kind) => kind.as_str(),
            Self::Custom(s) => s,
        }
    }

    /// The value written to the surface's cursor property.
    pub fn style_value(&self) -> Cow<'_, str> {
        match self {
            Self::Symbolic(kind) => Cow::Borrowed(kind.as_str()),
            Self::Custom(url) => Cow::Owned(format!("url({url}), {CUSTOM_CURSOR_FALLBACK}")),
        }
    }
}

impl From<CursorKind> for Cursor {
    fn from(kind: CursorKind) -> Self {
        Self::Symbolic(kind)
    }
}

impl From<&str> for Cursor {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Cursor {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        match cursor {
            Cursor::Symbolic(kind) => kind.as_str().to_string(),
            Cursor::Custom(s) => s,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
