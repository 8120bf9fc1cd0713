//! Profiling instrumentation for the pointer hot paths.
//!
//! Pointer-move fires on every mouse event while dragging, so timing is compiled
//! in only with the `profiling` feature:
//! ```ignore
//! fn hit_test() {
//!     profile_scope!("hit_test");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Moves slower than this are reported at warn level
pub const SLOW_EVENT_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::SLOW_EVENT_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// RAII timer: logs its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    warn_threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, warn_threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            warn_threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.warn_threshold_ms {
            warn!(scope = self.name, elapsed_ms = elapsed, "Slow input handling");
        } else {
            trace!(scope = self.name, elapsed_ms = elapsed);
        }
    }
}
