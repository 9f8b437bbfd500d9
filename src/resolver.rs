//! Cursor resolver - picks the pointer cursor for the current interaction
//! state and writes it to the surface only when it changes.
//!
//! ## Rule Order
//!
//! ```text
//! drop target present      -> its drop override, else "alias"
//! dragged present          -> its drag override, else "grabbing"
//! hover override set       -> that override (ignores enabled state)
//! hovered disabled         -> "default"
//! hovered draggable        -> "grab"
//! otherwise                -> "pointer"
//! ```
//!
//! The first matching rule wins. The symbolic fallbacks come from
//! `FallbackCursors` and can be replaced through settings.
//!
//! ## Change Gate
//!
//! The last applied cursor is cached and compared by value. Holding an
//! interaction state therefore costs one surface write, no matter how often
//! `update` is called.

use crate::cursor::{Cursor, CursorKind};
use crate::profile_scope;
use crate::settings::{CursorSettings, FallbackCursors};
use crate::surface::CursorSurface;
use crate::target::Interactive;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// The rule that decided a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorRule {
    DropTarget,
    Dragging,
    HoverOverride,
    Disabled,
    Draggable,
    Hover,
}

/// A resolved cursor and the rule that produced it.
///
/// Overrides are borrowed from the object; symbolic fallbacks are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub cursor: Cow<'a, Cursor>,
    pub rule: CursorRule,
}

impl<'a> Resolution<'a> {
    fn borrowed(cursor: &'a Cursor, rule: CursorRule) -> Self {
        Self {
            cursor: Cow::Borrowed(cursor),
            rule,
        }
    }

    fn fallback(kind: CursorKind, rule: CursorRule) -> Self {
        Self {
            cursor: Cow::Owned(Cursor::Symbolic(kind)),
            rule,
        }
    }

    fn override_or(cursor: Option<&'a Cursor>, kind: CursorKind, rule: CursorRule) -> Self {
        match cursor {
            Some(cursor) => Self::borrowed(cursor, rule),
            None => Self::fallback(kind, rule),
        }
    }
}

/// Run the rule chain for one interaction sample.
///
/// Pure: reads the objects and fallbacks, touches nothing else.
pub fn resolve_cursor<'a>(
    fallbacks: &FallbackCursors,
    dragged: Option<&'a dyn Interactive>,
    hovered: &'a dyn Interactive,
    drop_target: Option<&'a dyn Interactive>,
) -> Resolution<'a> {
    if let Some(target) = drop_target {
        return Resolution::override_or(
            target.cursor_drop(),
            fallbacks.drop_target,
            CursorRule::DropTarget,
        );
    }

    if let Some(dragged) = dragged {
        return Resolution::override_or(
            dragged.cursor_drag(),
            fallbacks.dragging,
            CursorRule::Dragging,
        );
    }

    if let Some(cursor) = hovered.cursor().filter(|c| !c.is_empty()) {
        return Resolution::borrowed(cursor, CursorRule::HoverOverride);
    }

    if !hovered.is_interaction_enabled() {
        return Resolution::fallback(fallbacks.disabled, CursorRule::Disabled);
    }

    if hovered.is_draggable() {
        Resolution::fallback(fallbacks.draggable, CursorRule::Draggable)
    } else {
        Resolution::fallback(fallbacks.hover, CursorRule::Hover)
    }
}

/// Update counters, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    /// Updates that ran the rule chain
    pub evaluations: u64,
    /// Surface writes performed
    pub writes: u64,
    /// Evaluations that resolved to the cursor already applied
    pub unchanged: u64,
}

/// Owns the cursor state of one display surface.
///
/// Single-writer: calls to `update` must be serialized by the host.
pub struct CursorResolver<S: CursorSurface> {
    /// When false, `update` does nothing
    pub enabled: bool,
    surface: S,
    last_applied: Option<Cursor>,
    fallbacks: FallbackCursors,
    stats: ResolverStats,
}

impl<S: CursorSurface> CursorResolver<S> {
    /// Bind a resolver to `surface` with default settings.
    pub fn new(surface: S) -> Self {
        Self {
            enabled: true,
            surface,
            last_applied: None,
            fallbacks: FallbackCursors::default(),
            stats: ResolverStats::default(),
        }
    }

    pub fn with_settings(surface: S, settings: &CursorSettings) -> Self {
        let mut resolver = Self::new(surface);
        resolver.apply_settings(settings);
        resolver
    }

    /// Replace the enabled flag and fallbacks. Takes effect on the next
    /// `update`.
    pub fn apply_settings(&mut self, settings: &CursorSettings) {
        self.enabled = settings.enabled;
        self.fallbacks = settings.fallbacks.clone();
        debug!(enabled = settings.enabled, "Applied cursor settings");
    }

    /// Resolve the cursor for this interaction sample and write it to the
    /// surface if it differs from the last one written.
    ///
    /// Does nothing while disabled or when nothing is hovered.
    pub fn update(
        &mut self,
        dragged: Option<&dyn Interactive>,
        hovered: Option<&dyn Interactive>,
        drop_target: Option<&dyn Interactive>,
    ) {
        profile_scope!("cursor_update");

        if !self.enabled {
            return;
        }
        let Some(hovered) = hovered else {
            return;
        };

        self.stats.evaluations += 1;
        let resolution = resolve_cursor(&self.fallbacks, dragged, hovered, drop_target);

        if self.last_applied.as_ref() == Some(&*resolution.cursor) {
            self.stats.unchanged += 1;
            trace!(cursor = %resolution.cursor, "Cursor unchanged");
            return;
        }

        let cursor = resolution.cursor.into_owned();
        let style = cursor.style_value();
        debug!(
            cursor = %cursor,
            rule = ?resolution.rule,
            style = %style,
            "Applying cursor"
        );
        self.surface.set_cursor_style(&style);
        self.last_applied = Some(cursor);
        self.stats.writes += 1;
    }

    /// The cursor most recently written, `None` before the first write
    pub fn last_applied(&self) -> Option<&Cursor> {
        self.last_applied.as_ref()
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    pub fn fallbacks(&self) -> &FallbackCursors {
        &self.fallbacks
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
