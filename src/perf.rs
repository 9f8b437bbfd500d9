//! Profiling instrumentation for the update path.
//!
//! `CursorResolver::update` runs once per frame or pointer move, so its
//! timing is worth watching during development. Enable with the
//! `profiling` feature:
//!
//! ```sh
//! cargo build --features profiling
//! ```
//!
//! ```ignore
//! fn update(&mut self) {
//!     profile_scope!("cursor_update");
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_UPDATE_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

/// Runtime switch for timers created by `profile_scope!`
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer: logs when the scope it guards outlives its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the slow-update threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_UPDATE_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.3}", elapsed_ms),
                threshold_ms = format!("{:.3}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);
        }
    }
}
