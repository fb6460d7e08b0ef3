//! Error sinks
//!
//! The [`Manager`](crate::Manager) never raises the errors it collects; it
//! hands each one to an [`ErrorSink`]. Hosts plug in whatever reporting they
//! already have without this crate depending on it.

use farewell_core::Error;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// Receives errors reported during shutdown
pub trait ErrorSink: Send + Sync {
    /// Take care of an error
    fn handle(&self, err: Error);
}

impl<S> ErrorSink for Arc<S>
where
    S: ErrorSink + ?Sized,
{
    fn handle(&self, err: Error) {
        (**self).handle(err);
    }
}

impl<S> ErrorSink for Box<S>
where
    S: ErrorSink + ?Sized,
{
    fn handle(&self, err: Error) {
        (**self).handle(err);
    }
}

/// Discards every error. Installed by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn handle(&self, _err: Error) {}
}

/// Keeps every error it receives, in order
///
/// Share it through an `Arc` to inspect what a [`Manager`](crate::Manager)
/// reported.
#[derive(Debug, Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<Error>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded errors, oldest first
    pub fn errors(&self) -> Vec<Error> {
        self.errors.lock().clone()
    }

    /// The most recently recorded error, if any
    pub fn last(&self) -> Option<Error> {
        self.errors.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }
}

impl ErrorSink for RecordingSink {
    fn handle(&self, err: Error) {
        self.errors.lock().push(err);
    }
}

/// Emits every error as a `tracing` event
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Create a sink logging at `level`
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::ERROR)
    }
}

impl ErrorSink for TracingSink {
    fn handle(&self, err: Error) {
        let panicked = err.is_panic();

        if self.level == Level::ERROR {
            tracing::error!(error = %err, panicked, "shutdown error");
        } else if self.level == Level::WARN {
            tracing::warn!(error = %err, panicked, "shutdown error");
        } else if self.level == Level::INFO {
            tracing::info!(error = %err, panicked, "shutdown error");
        } else if self.level == Level::DEBUG {
            tracing::debug!(error = %err, panicked, "shutdown error");
        } else {
            tracing::trace!(error = %err, panicked, "shutdown error");
        }
    }
}

/// Adapts a closure into an [`ErrorSink`]
pub struct FnSink<F>(pub F);

impl<F> ErrorSink for FnSink<F>
where
    F: Fn(Error) + Send + Sync,
{
    fn handle(&self, err: Error) {
        (self.0)(err);
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnSink(<closure>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_noop_sink_accepts_errors() {
        NoopSink.handle(Error::handler("ignored"));
    }

    #[test]
    fn test_recording_sink_last() {
        let sink = RecordingSink::new();
        assert!(sink.last().is_none());
        assert!(sink.is_empty());

        let first = Error::handler("first");
        let second = Error::handler("second");
        sink.handle(first.clone());
        sink.handle(second.clone());

        assert_eq!(sink.len(), 2);
        assert!(sink.last().unwrap().same(&second));
        assert!(sink.errors()[0].same(&first));
    }

    #[test]
    fn test_shared_recording_sink() {
        let sink = Arc::new(RecordingSink::new());
        let shared: Box<dyn ErrorSink> = Box::new(Arc::clone(&sink));

        shared.handle(Error::panic("boom"));

        assert_eq!(sink.last().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_fn_sink() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let sink = FnSink(move |_err: Error| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sink.handle(Error::handler("one"));
        sink.handle(Error::handler("two"));

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tracing_sink_defaults_to_error_level() {
        let sink = TracingSink::default();
        assert_eq!(sink.level(), Level::ERROR);

        // No subscriber installed: the event is simply dropped
        sink.handle(Error::handler("logged"));
        TracingSink::new(Level::DEBUG).handle(Error::unknown_panic("1"));
    }
}
