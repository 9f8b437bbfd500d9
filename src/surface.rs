//! Display surfaces the resolver writes cursor styles to.
//!
//! A surface only needs a settable, string-valued cursor property. The
//! resolver never reads it back.

use parking_lot::Mutex;
use std::sync::Arc;

/// A display surface with a settable cursor style property.
pub trait CursorSurface {
    fn set_cursor_style(&mut self, style: &str);
}

/// Surface handle shared between the resolver and the host.
pub type SharedSurface<S> = Arc<Mutex<S>>;

/// Wrap a surface so the host can keep a handle after binding it.
pub fn shared<S: CursorSurface>(surface: S) -> SharedSurface<S> {
    Arc::new(Mutex::new(surface))
}

impl<S: CursorSurface + ?Sized> CursorSurface for &mut S {
    fn set_cursor_style(&mut self, style: &str) {
        (**self).set_cursor_style(style);
    }
}

impl<S: CursorSurface + ?Sized> CursorSurface for Box<S> {
    fn set_cursor_style(&mut self, style: &str) {
        (**self).set_cursor_style(style);
    }
}

impl<S: CursorSurface + ?Sized> CursorSurface for Arc<Mutex<S>> {
    fn set_cursor_style(&mut self, style: &str) {
        self.lock().set_cursor_style(style);
    }
}

// ============================================================================
// Recording Surface
// ============================================================================

/// Headless surface that keeps its current style and every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    current: Option<String>,
    writes: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor style, `None` until the first write
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Every style written, oldest first
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn take_writes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.writes)
    }
}

impl CursorSurface for RecordingSurface {
    fn set_cursor_style(&mut self, style: &str) {
        self.current = Some(style.to_string());
        self.writes.push(style.to_string());
    }
}
