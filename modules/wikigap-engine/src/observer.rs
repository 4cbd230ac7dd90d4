//! Run observation: the caller-facing progress/debug callbacks and the
//! engine-side reporter that enforces the progress contract.

use std::sync::atomic::{AtomicU64, Ordering};

/// Callbacks invoked while a discovery run executes. `progress` receives a
/// value in 0–100 that never decreases; `debug` receives free-text trace
/// lines with no parsing contract.
pub trait RunObserver: Send + Sync {
    fn progress(&self, _percent: f64) {}
    fn debug(&self, _line: &str) {}
}

/// Observer that ignores everything.
pub struct NullObserver;

impl RunObserver for NullObserver {}

/// Wraps the caller's observer and clamps the progress stream: values are
/// kept in 0–100 and regressions are swallowed, so the caller always sees a
/// monotonically non-decreasing sequence.
pub(crate) struct RunReporter<'a> {
    observer: &'a dyn RunObserver,
    // Bits of the highest value reported so far. IEEE bit patterns of
    // non-negative floats order the same way the floats do, so fetch_max
    // on the raw bits is a lock-free high-water mark.
    high_water: AtomicU64,
}

impl<'a> RunReporter<'a> {
    pub fn new(observer: &'a dyn RunObserver) -> Self {
        Self {
            observer,
            high_water: AtomicU64::new(0),
        }
    }

    pub fn progress(&self, percent: f64) {
        let capped = percent.clamp(0.0, 100.0);
        let prev = self.high_water.fetch_max(capped.to_bits(), Ordering::SeqCst);
        if capped.to_bits() > prev {
            self.observer.progress(capped);
        }
    }

    pub fn debug(&self, line: &str) {
        self.observer.debug(line);
    }
}
