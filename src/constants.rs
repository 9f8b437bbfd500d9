//! Crate-wide constants.
//!
//! Centralizes fallback cursor names and file locations so the resolver,
//! settings and replay driver agree on them.

use crate::cursor::CursorKind;

// ============================================================================
// Fallback Cursors
// ============================================================================

/// Shown over a drop target that has no drop override
pub const DROP_TARGET_CURSOR: CursorKind = CursorKind::Alias;

/// Shown while dragging an object that has no drag override
pub const DRAGGING_CURSOR: CursorKind = CursorKind::Grabbing;

/// Shown over an object whose interaction is disabled
pub const DISABLED_CURSOR: CursorKind = CursorKind::Default;

/// Shown over an enabled, draggable object
pub const DRAGGABLE_CURSOR: CursorKind = CursorKind::Grab;

/// Shown over an enabled object that cannot be dragged
pub const HOVER_CURSOR: CursorKind = CursorKind::Pointer;

/// Symbolic cursor appended after every custom image reference
pub const CUSTOM_CURSOR_FALLBACK: CursorKind = CursorKind::Default;

// ============================================================================
// Settings
// ============================================================================

/// Directory under the platform config dir holding our settings
pub const SETTINGS_DIR_NAME: &str = "canvas-cursor";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Diagnostics
// ============================================================================

/// An update slower than this is logged when profiling is enabled
pub const SLOW_UPDATE_MS: f64 = 1.0;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "canvas_cursor=info";
