//! Pointer cursor feedback for interactive canvases.
//!
//! Given which object is hovered, dragged or targeted for a drop, the
//! `CursorResolver` picks the cursor to show and writes it to the display
//! surface only when it changes.
//!
//! ## Modules
//!
//! - `cursor` - symbolic cursor keywords and custom cursor values
//! - `target` - the `Interactive` capability and stock scene objects
//! - `surface` - display surfaces the resolver writes to
//! - `resolver` - rule chain and change-gated application
//! - `settings` / `settings_watcher` - JSON settings with hot-reload
//! - `replay` - headless replay of scripted interaction samples

pub mod constants;
pub mod cursor;
pub mod error;
pub mod logging;
pub mod perf;
pub mod replay;
pub mod resolver;
pub mod settings;
pub mod settings_watcher;
pub mod surface;
pub mod target;

pub use cursor::{Cursor, CursorKind};
pub use error::{CursorError, CursorResult};
pub use resolver::{CursorResolver, CursorRule, Resolution, ResolverStats, resolve_cursor};
pub use settings::{CursorSettings, FallbackCursors};
pub use surface::{CursorSurface, RecordingSurface, SharedSurface, shared};
pub use target::{InstancedObject, Interactive, SceneNode, SceneObject};
