//! Shutdown manager
//!
//! The [`Manager`] owns the ordered handler list and the active
//! [`ErrorSink`]. Shutdown runs every handler in registration order and
//! reports failures to the sink; one failing handler never stops the ones
//! after it.
//!
//! A manager is meant to be driven from a single thread. Registration and
//! shutdown take `&mut self`; wrap the manager in a lock to share it.

use crate::config::ShutdownConfig;
use crate::handler::{func, guarded, Handler};
use crate::recover::{recover, PanicPayload};
use crate::sink::{ErrorSink, NoopSink};
use farewell_core::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, debug_span, trace, warn};

/// Manages an application shutdown by calling the registered handlers
pub struct Manager {
    handlers: Vec<Handler>,
    /// Receives every error raised during shutdown.
    ///
    /// May be replaced at any time; only errors reported afterwards reach
    /// the new sink.
    pub error_sink: Box<dyn ErrorSink>,
    config: ShutdownConfig,
}

impl Manager {
    /// Create a manager with no handlers and a [`NoopSink`]
    pub fn new() -> Self {
        Self::with_config(ShutdownConfig::default())
    }

    pub fn with_config(config: ShutdownConfig) -> Self {
        Self {
            handlers: Vec::new(),
            error_sink: Box::new(NoopSink),
            config,
        }
    }

    /// Replace the error sink, builder style
    #[must_use]
    pub fn with_error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.set_error_sink(sink);
        self
    }

    pub fn set_error_sink(&mut self, sink: impl ErrorSink + 'static) {
        self.error_sink = Box::new(sink);
    }

    pub fn config(&self) -> &ShutdownConfig {
        &self.config
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Append handlers after the existing ones, keeping their order
    pub fn register<I>(&mut self, handlers: I)
    where
        I: IntoIterator<Item = Handler>,
    {
        let before = self.handlers.len();
        self.handlers.extend(handlers);
        debug!(
            added = self.handlers.len() - before,
            total = self.handlers.len(),
            "registered shutdown handlers"
        );
    }

    /// Append a plain closure, made panic safe with [`func`]
    pub fn register_fn<F>(&mut self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.register([func(f)]);
    }

    /// Place handlers before the existing ones, keeping their order
    pub fn register_as_first<I>(&mut self, handlers: I)
    where
        I: IntoIterator<Item = Handler>,
    {
        let mut first: Vec<Handler> = handlers.into_iter().collect();
        let added = first.len();
        first.append(&mut self.handlers);
        self.handlers = first;
        debug!(
            added,
            total = self.handlers.len(),
            "registered shutdown handlers first"
        );
    }

    /// Run every handler in order, reporting failures to the error sink
    pub fn shutdown(&mut self) {
        self.shutdown_with(None);
    }

    /// Report the panic the caller caught (if any), then run every handler.
    ///
    /// `payload` is the `Err` side of a [`std::panic::catch_unwind`] wrapped
    /// around the code this shutdown guards.
    pub fn shutdown_with(&mut self, payload: Option<PanicPayload>) {
        let span = debug_span!(
            "shutdown",
            name = %self.config.name,
            handlers = self.handlers.len()
        );
        let _entered = span.enter();

        if let Some(err) = recover(payload) {
            debug!(error = %err, "recovered panic before shutdown");
            self.report(err);
        }

        let mut failures = 0usize;
        for (index, handler) in self.handlers.iter_mut().enumerate() {
            trace!(index, "running shutdown handler");
            if let Err(err) = guarded(|| handler()) {
                failures += 1;
                debug!(index, error = %err, "shutdown handler failed");
                report_to(self.error_sink.as_ref(), err);
            }
        }

        if self.config.clear_after_shutdown {
            self.handlers.clear();
        }

        debug!(failures, "shutdown complete");
    }

    /// Run `body`, then shut down no matter how `body` exits.
    ///
    /// Returns `None` when `body` panicked; the panic has been reported to
    /// the error sink and does not propagate.
    pub fn run<F, T>(&mut self, body: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => {
                self.shutdown();
                Some(value)
            }
            Err(payload) => {
                self.shutdown_with(Some(payload));
                None
            }
        }
    }

    fn report(&self, err: Error) {
        report_to(self.error_sink.as_ref(), err);
    }
}

/// Hand `err` to `sink`, containing a panicking sink.
fn report_to(sink: &dyn ErrorSink, err: Error) {
    if panic::catch_unwind(AssertUnwindSafe(|| sink.handle(err))).is_err() {
        warn!("error sink panicked while handling a shutdown error");
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("handlers", &self.handlers.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
