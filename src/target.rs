//! Interactive objects - what the resolver asks of hovered, dragged and
//! drop-target objects.
//!
//! The resolver never inspects concrete object types. Every object exposes
//! the `Interactive` capability; composite objects that stand for many
//! sub-instances answer the enabled query from their hovered instance,
//! plain objects from their own flag.

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};
use serde::{Deserialize, Serialize};

/// Capability queried by the cursor resolver.
///
/// Every method has a "not set" default so hosts only override what their
/// objects actually carry.
pub trait Interactive {
    /// Override shown while merely hovered
    fn cursor(&self) -> Option<&Cursor> {
        None
    }

    /// Override shown while this object is being dragged
    fn cursor_drag(&self) -> Option<&Cursor> {
        None
    }

    /// Override shown while this object is the active drop target
    fn cursor_drop(&self) -> Option<&Cursor> {
        None
    }

    fn is_draggable(&self) -> bool {
        false
    }

    /// Whether the object currently accepts interaction.
    fn is_interaction_enabled(&self) -> bool {
        true
    }
}

// ============================================================================
// Plain Objects
// ============================================================================

/// A single scene object with its own enabled flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneObject {
    pub cursor: Option<Cursor>,
    pub cursor_drag: Option<Cursor>,
    pub cursor_drop: Option<Cursor>,
    pub draggable: bool,
    /// Effective enabled state, already propagated from ancestors
    pub enabled: bool,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            cursor: None,
            cursor_drag: None,
            cursor_drop: None,
            draggable: false,
            enabled: true,
        }
    }
}

impl SceneObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_drag_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor_drag = Some(cursor.into());
        self
    }

    pub fn with_drop_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor_drop = Some(cursor.into());
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Interactive for SceneObject {
    fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    fn cursor_drag(&self) -> Option<&Cursor> {
        self.cursor_drag.as_ref()
    }

    fn cursor_drop(&self) -> Option<&Cursor> {
        self.cursor_drop.as_ref()
    }

    fn is_draggable(&self) -> bool {
        self.draggable
    }

    fn is_interaction_enabled(&self) -> bool {
        self.enabled
    }
}

// ============================================================================
// Instanced Objects
// ============================================================================

/// One object standing for many logical sub-instances.
///
/// Cursor overrides and the draggable flag are shared by all instances;
/// the enabled state is tracked per instance, and the hit tester reports
/// which instance is under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstancedObject {
    #[serde(flatten)]
    pub base: SceneObject,
    /// Enabled flag per instance, indexed by instance id
    pub instances: Vec<bool>,
    pub hovered_instance: Option<usize>,
}

impl InstancedObject {
    /// Create with `count` instances, all enabled, none hovered.
    pub fn new(count: usize) -> Self {
        Self {
            base: SceneObject::default(),
            instances: vec![true; count],
            hovered_instance: None,
        }
    }

    pub fn with_base(mut self, base: SceneObject) -> Self {
        self.base = base;
        self
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn check_index(&self, index: usize) -> CursorResult<()> {
        if index < self.instances.len() {
            Ok(())
        } else {
            Err(CursorError::InstanceOutOfRange {
                index,
                count: self.instances.len(),
            })
        }
    }

    pub fn set_instance_enabled(&mut self, index: usize, enabled: bool) -> CursorResult<()> {
        self.check_index(index)?;
        self.instances[index] = enabled;
        Ok(())
    }

    /// Record which instance the pointer is over (`None` when none is).
    pub fn set_hovered_instance(&mut self, index: Option<usize>) -> CursorResult<()> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        self.hovered_instance = index;
        Ok(())
    }

    /// Enabled state of the hovered instance; false when nothing is hovered.
    pub fn hovered_instance_enabled(&self) -> bool {
        self.hovered_instance
            .and_then(|index| self.instances.get(index).copied())
            .unwrap_or(false)
    }
}

impl Interactive for InstancedObject {
    fn cursor(&self) -> Option<&Cursor> {
        self.base.cursor()
    }

    fn cursor_drag(&self) -> Option<&Cursor> {
        self.base.cursor_drag()
    }

    fn cursor_drop(&self) -> Option<&Cursor> {
        self.base.cursor_drop()
    }

    fn is_draggable(&self) -> bool {
        self.base.draggable
    }

    fn is_interaction_enabled(&self) -> bool {
        self.base.enabled && self.hovered_instance_enabled()
    }
}

// ============================================================================
// Serialized Scenes
// ============================================================================

/// Either kind of object, as stored in a serialized scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    Plain(SceneObject),
    Instanced(InstancedObject),
}

impl SceneNode {
    pub fn as_instanced_mut(&mut self) -> Option<&mut InstancedObject> {
        match self {
            Self::Instanced(obj) => Some(obj),
            Self::Plain(_) => None,
        }
    }

    fn as_interactive(&self) -> &dyn Interactive {
        match self {
            Self::Plain(obj) => obj as &dyn Interactive,
            Self::Instanced(obj) => obj as &dyn Interactive,
        }
    }
}

impl Interactive for SceneNode {
    fn cursor(&self) -> Option<&Cursor> {
        self.as_interactive().cursor()
    }

    fn cursor_drag(&self) -> Option<&Cursor> {
        self.as_interactive().cursor_drag()
    }

    fn cursor_drop(&self) -> Option<&Cursor> {
        self.as_interactive().cursor_drop()
    }

    fn is_draggable(&self) -> bool {
        self.as_interactive().is_draggable()
    }

    fn is_interaction_enabled(&self) -> bool {
        self.as_interactive().is_interaction_enabled()
    }
}
