//! Conversion implementations for error types

use super::types::Error;

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::handler(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::handler(message)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::external(error)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::external(error)
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::external(error)
    }
}
