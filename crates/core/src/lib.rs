//! Core error type for the `farewell` workspace.
//!
//! Every failure that reaches a shutdown error sink is a [`Error`]: a value
//! returned by a handler, a panic payload that has been normalized, or an
//! error from other code carried through unchanged.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum, the `Result` alias, builders and
//!   conversions, and the `ResultExt` extension trait for adding context
//!   inside handlers.

pub mod errors;

pub use self::errors::{Error, Result, ResultExt};
