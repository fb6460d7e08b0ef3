//! Builder methods for creating errors

use super::types::Error;
use std::sync::Arc;

impl Error {
    /// Create a handler failure
    #[must_use]
    pub fn handler(message: impl Into<String>) -> Self {
        Error::Handler {
            message: Arc::from(message.into()),
        }
    }

    /// Create an error from a text panic payload
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic {
            message: Arc::from(message.into()),
        }
    }

    /// Create an error from the rendering of an unrecognized panic payload
    #[must_use]
    pub fn unknown_panic(rendered: impl Into<String>) -> Self {
        Error::UnknownPanic {
            rendered: Arc::from(rendered.into()),
        }
    }

    /// Wrap an error raised by other code
    #[must_use]
    pub fn external(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let source: Arc<dyn std::error::Error + Send + Sync> = Arc::from(source.into());
        Error::External {
            message: Arc::from(source.to_string()),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(Error::handler("flush failed").to_string(), "flush failed");
        assert_eq!(Error::panic("internal error").to_string(), "internal error");
        assert_eq!(
            Error::unknown_panic("123").to_string(),
            "Unknown panic, received: 123"
        );
    }

    #[test]
    fn test_external_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::external(io);

        assert_eq!(err.to_string(), "pipe closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_clone_is_same() {
        let err = Error::handler("error");
        let clone = err.clone();

        assert!(err.same(&clone));
        assert!(!err.same(&Error::handler("error")));
        assert!(!err.same(&Error::panic("error")));
    }

    #[test]
    fn test_is_panic() {
        assert!(Error::panic("boom").is_panic());
        assert!(Error::unknown_panic("1").is_panic());
        assert!(!Error::handler("boom").is_panic());
    }
}
