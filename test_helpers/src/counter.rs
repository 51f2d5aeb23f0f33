//! Counting spy for runnables and suppliers.
//!
//! # Examples
//!
//! ```
//! use railway_test_helpers::CallCounter;
//!
//! let counter = CallCounter::new();
//! let run = counter.runnable();
//! run();
//! counter.assert_called_once();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many times the closures it hands out were invoked.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    /// Create a counter that has seen no calls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Register one call.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// A runnable that registers a call when invoked.
    pub fn runnable(&self) -> impl FnOnce() + '_ {
        move || self.hit()
    }

    /// A supplier that registers a call and returns `value`.
    pub fn returning<R>(&self, value: R) -> impl FnOnce() -> R + '_
    where
        R: 'static,
    {
        move || {
            self.hit();
            value
        }
    }

    /// Number of calls registered so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fail the test unless no call was registered.
    ///
    /// # Panics
    ///
    /// Panics when at least one call was registered.
    #[track_caller]
    pub fn assert_never_called(&self) {
        assert_eq!(self.count(), 0, "expected no calls");
    }

    /// Fail the test unless exactly one call was registered.
    ///
    /// # Panics
    ///
    /// Panics when the call count is not one.
    #[track_caller]
    pub fn assert_called_once(&self) {
        assert_eq!(self.count(), 1, "expected exactly one call");
    }
}
