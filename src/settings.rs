//! Resolver settings.
//!
//! Settings are stored as JSON. Every key is optional; missing keys take
//! the built-in defaults, so an empty object is a valid settings file.
//!
//! ```json
//! {
//!   "enabled": true,
//!   "fallbacks": { "drop_target": "alias", "dragging": "grabbing" }
//! }
//! ```

use crate::constants::{
    DISABLED_CURSOR, DRAGGABLE_CURSOR, DRAGGING_CURSOR, DROP_TARGET_CURSOR, HOVER_CURSOR,
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::cursor::CursorKind;
use crate::error::CursorResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Symbolic cursors each rule falls back to when the object carries no
/// override. Only keywords from the closed set are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackCursors {
    /// Drop target without a drop override
    pub drop_target: CursorKind,
    /// Dragged object without a drag override
    pub dragging: CursorKind,
    /// Hovered object with interaction disabled
    pub disabled: CursorKind,
    /// Hovered, enabled and draggable
    pub draggable: CursorKind,
    /// Hovered, enabled, not draggable
    pub hover: CursorKind,
}

impl Default for FallbackCursors {
    fn default() -> Self {
        Self {
            drop_target: DROP_TARGET_CURSOR,
            dragging: DRAGGING_CURSOR,
            disabled: DISABLED_CURSOR,
            draggable: DRAGGABLE_CURSOR,
            hover: HOVER_CURSOR,
        }
    }
}

/// Settings applied to a `CursorResolver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Whether cursor updates are applied at all
    pub enabled: bool,
    pub fallbacks: FallbackCursors,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            fallbacks: FallbackCursors::default(),
        }
    }
}

impl CursorSettings {
    /// Load settings from a JSON file. A fallback that is not a symbolic
    /// cursor keyword is a parse error.
    pub fn load(path: &Path) -> CursorResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded cursor settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load cursor settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> CursorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default settings location: `<config dir>/canvas-cursor/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
