//! Recording spy for consumers and functions.
//!
//! # Examples
//!
//! ```
//! use railway_test_helpers::Recorder;
//!
//! let recorder = Recorder::new();
//! let consume = recorder.consumer();
//! consume(&"seen");
//! recorder.assert_called_once_with(&"seen");
//! ```

use std::fmt;

use parking_lot::Mutex;

/// Keeps a clone of every argument passed to the closures it hands out.
pub struct Recorder<T> {
    calls: Mutex<Vec<T>>,
}

impl<T> Recorder<T> {
    /// Create a recorder with no calls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a call with `argument`.
    pub fn record(&self, argument: T) {
        self.calls.lock().push(argument);
    }

    /// A function that records its argument and maps it through `function`.
    pub fn function<R, F>(&self, function: F) -> impl FnOnce(T) -> R + '_
    where
        T: Clone,
        F: FnOnce(T) -> R + 'static,
    {
        move |argument| {
            self.record(argument.clone());
            function(argument)
        }
    }

    /// Number of calls registered so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
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
}

impl<T: Clone> Recorder<T> {
    /// A consumer that records a clone of the borrowed argument.
    pub fn consumer(&self) -> impl FnOnce(&T) + '_ {
        move |argument| self.record(argument.clone())
    }

    /// Clones of every recorded argument, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T: PartialEq + fmt::Debug> Recorder<T> {
    /// Fail the test unless exactly one call with `expected` was registered.
    ///
    /// # Panics
    ///
    /// Panics when the recorded calls differ from `[expected]`.
    #[track_caller]
    pub fn assert_called_once_with(&self, expected: &T) {
        let calls = self.calls.lock();
        assert_eq!(calls.as_slice(), std::slice::from_ref(expected));
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Recorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("calls", &*self.calls.lock())
            .finish()
    }
}
