//! Headless replay of interaction samples.
//!
//! A replay script describes a scene (objects by id) and a sequence of
//! interaction samples as the hit tester would report them. Each sample is
//! fed to a `CursorResolver` bound to a `RecordingSurface`; the report lists
//! every cursor style written.
//!
//! ```json
//! {
//!   "objects": {
//!     "card": { "kind": "plain", "draggable": true },
//!     "bin": { "kind": "plain", "cursor_drop": "copy" }
//!   },
//!   "samples": [
//!     { "hovered": "card" },
//!     { "hovered": "card", "dragged": "card" },
//!     { "hovered": "bin", "dragged": "card", "drop_target": "bin" }
//!   ]
//! }
//! ```

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};
use crate::resolver::{CursorResolver, ResolverStats};
use crate::settings::CursorSettings;
use crate::surface::RecordingSurface;
use crate::target::{Interactive, SceneNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One interaction sample, objects named by scene id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSample {
    pub dragged: Option<String>,
    pub hovered: Option<String>,
    pub drop_target: Option<String>,
    /// Sub-instance under the pointer, for instanced hovered objects.
    /// Applies to this sample only.
    pub hovered_instance: Option<usize>,
    /// Toggle the resolver before this sample is applied
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub settings: Option<CursorSettings>,
    pub objects: BTreeMap<String, SceneNode>,
    pub samples: Vec<InteractionSample>,
}

impl ReplayScript {
    pub fn from_path(path: &Path) -> CursorResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Cursor styles written to the surface, in order
    pub writes: Vec<String>,
    pub final_cursor: Option<Cursor>,
    pub stats: ResolverStats,
}

fn lookup<'a>(
    objects: &'a BTreeMap<String, SceneNode>,
    id: Option<&str>,
) -> CursorResult<Option<&'a dyn Interactive>> {
    match id {
        None => Ok(None),
        Some(id) => objects
            .get(id)
            .map(|node| Some(node as &dyn Interactive))
            .ok_or_else(|| CursorError::UnknownObject(id.to_string())),
    }
}

/// Run every sample of `script` through a fresh resolver.
pub fn replay(script: ReplayScript) -> CursorResult<ReplayReport> {
    let ReplayScript {
        settings,
        mut objects,
        samples,
    } = script;

    let settings = settings.unwrap_or_default();
    let mut resolver = CursorResolver::with_settings(RecordingSurface::new(), &settings);

    for (index, sample) in samples.iter().enumerate() {
        if let Some(enabled) = sample.enabled {
            resolver.enabled = enabled;
        }

        if let Some(id) = sample.hovered.as_deref() {
            let node = objects
                .get_mut(id)
                .ok_or_else(|| CursorError::UnknownObject(id.to_string()))?;
            match (node.as_instanced_mut(), sample.hovered_instance) {
                // Each sample restates the instance; omitting it clears the last one
                (Some(instanced), instance) => instanced.set_hovered_instance(instance)?,
                (None, Some(_)) => return Err(CursorError::NotInstanced(id.to_string())),
                (None, None) => {}
            }
        }

        let dragged = lookup(&objects, sample.dragged.as_deref())?;
        let hovered = lookup(&objects, sample.hovered.as_deref())?;
        let drop_target = lookup(&objects, sample.drop_target.as_deref())?;

        resolver.update(dragged, hovered, drop_target);
        debug!(sample = index, last_applied = ?resolver.last_applied(), "Replayed sample");
    }

    let final_cursor = resolver.last_applied().cloned();
    let stats = resolver.stats();
    Ok(ReplayReport {
        writes: resolver.into_surface().take_writes(),
        final_cursor,
        stats,
    })
}
