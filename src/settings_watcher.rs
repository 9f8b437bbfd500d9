//! Settings hot-reload.
//!
//! Watches the settings file's directory and reloads the settings when the
//! file is created or modified. Editors often replace files instead of
//! writing in place, so the parent directory is watched rather than the
//! file itself.
//!
//! The host polls from its interaction loop and hands the new settings to
//! `CursorResolver::apply_settings`.

use crate::error::CursorResult;
use crate::settings::CursorSettings;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

/// Outcome of a settings file change
#[derive(Debug)]
pub enum SettingsEvent {
    /// File changed and parsed successfully
    Reloaded(CursorSettings),
    /// File changed but could not be loaded
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops the watch thread
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. The file does not need to exist yet, but its
    /// parent directory does.
    pub fn new(path: PathBuf) -> CursorResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // Receiver gone means the SettingsWatcher was dropped
            let _ = tx.send(res);
        })?;

        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching cursor settings");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file events. Returns the reload result when the
    /// settings file changed since the last poll.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if self.is_relevant(&event) {
                        changed = true;
                    }
                }
                Ok(Err(e)) => warn!(error = %e, "Settings watcher error"),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if !changed {
            return None;
        }

        match CursorSettings::load(&self.path) {
            Ok(settings) => {
                debug!(path = %self.path.display(), "Cursor settings reloaded");
                Some(SettingsEvent::Reloaded(settings))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to reload cursor settings");
                Some(SettingsEvent::Error(e.to_string()))
            }
        }
    }

    fn is_relevant(&self, event: &Event) -> bool {
        matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
            && event
                .paths
                .iter()
                .any(|p| p.file_name() == self.path.file_name())
    }
}
