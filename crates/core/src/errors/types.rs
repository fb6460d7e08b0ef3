//! Core error type definitions

use std::sync::Arc;

/// Result type alias for shutdown handlers
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported during shutdown
///
/// Payloads are reference counted, so a clone is the *same* error: two
/// clones compare true under [`Error::same`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Failure returned explicitly by a handler
    Handler { message: Arc<str> },

    /// Panic whose payload was a text message
    Panic { message: Arc<str> },

    /// Panic whose payload was neither text nor an error
    UnknownPanic { rendered: Arc<str> },

    /// Error raised by other code
    External {
        message: Arc<str>,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Human-readable message, identical to the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether `self` and `other` are the same error value rather than two
    /// errors that happen to share a message.
    pub fn same(&self, other: &Error) -> bool {
        match (self, other) {
            (Error::Handler { message: a }, Error::Handler { message: b })
            | (Error::Panic { message: a }, Error::Panic { message: b })
            | (Error::UnknownPanic { rendered: a }, Error::UnknownPanic { rendered: b }) => {
                Arc::ptr_eq(a, b)
            }
            (Error::External { source: a, .. }, Error::External { source: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Whether this error was produced from a panic payload
    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panic { .. } | Error::UnknownPanic { .. })
    }
}
