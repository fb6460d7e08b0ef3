//! Shutdown handlers
//!
//! Shutdown handlers are the last resort of an application once flow
//! control is no longer in the caller's hands. A handler takes no arguments
//! and reports failure through its `Result`.

use crate::recover::from_panic_payload;
use farewell_core::Result;
use std::panic::{self, AssertUnwindSafe};

/// A fallible, parameterless cleanup action
pub type Handler = Box<dyn FnMut() -> Result<()> + Send>;

/// Box a fallible closure as a [`Handler`].
///
/// A panic inside `f` is still caught by the [`Manager`](crate::Manager)
/// while it runs the handler.
pub fn from_fn<F>(f: F) -> Handler
where
    F: FnMut() -> Result<()> + Send + 'static,
{
    Box::new(f)
}

/// Wrap a closure without an error return type.
///
/// So that no failure is silenced, a panic raised by `f` is caught and
/// returned as the handler's error.
pub fn func<F>(mut f: F) -> Handler
where
    F: FnMut() + Send + 'static,
{
    Box::new(move || {
        guarded(|| {
            f();
            Ok(())
        })
    })
}

/// Run `f`, turning a panic into an error.
pub(crate) fn guarded<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(from_panic_payload(payload)))
}
