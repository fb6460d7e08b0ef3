//! Ordered shutdown handlers for the last moments of an application.
//!
//! A [`Manager`] keeps a list of cleanup handlers and runs them in
//! registration order when the application terminates. Whatever goes wrong
//! along the way, a handler returning `Err`, a handler panicking, or the main
//! flow itself panicking, is converted into a [`farewell_core::Error`] and
//! handed to the installed [`ErrorSink`] instead of crashing the process.
//!
//! ## Key Components
//!
//! - **`recover`**: normalizes panic payloads into errors.
//! - **`handler`**: the [`Handler`] type and [`func`], which makes a plain
//!   closure panic safe.
//! - **`sink`**: the [`ErrorSink`] trait and its stock implementations.
//! - **`manager`**: the [`Manager`] orchestrating shutdown.
//! - **`config`**: [`ShutdownConfig`].
//! - **`logging`**: optional `tracing-subscriber` setup for binaries.
//!
//! ## Example
//!
//! ```rust
//! use farewell_shutdown::{from_fn, Manager, RecordingSink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut manager = Manager::new().with_error_sink(Arc::clone(&sink));
//!
//! manager.register_fn(|| println!("flushing buffers"));
//! manager.register([from_fn(|| Err("disk full".into()))]);
//!
//! let exit_code = manager.run(|| 0);
//!
//! assert_eq!(exit_code, Some(0));
//! assert_eq!(sink.last().unwrap().to_string(), "disk full");
//! ```

pub mod config;
pub mod handler;
pub mod logging;
pub mod manager;
pub mod recover;
pub mod sink;

pub use config::ShutdownConfig;
pub use farewell_core::{Error, Result, ResultExt};
pub use handler::{from_fn, func, Handler};
pub use manager::Manager;
pub use recover::{from_panic_payload, recover, PanicPayload};
pub use sink::{ErrorSink, FnSink, NoopSink, RecordingSink, TracingSink};
