//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Handler { message } | Error::Panic { message } => f.write_str(message),
            Error::UnknownPanic { rendered } => {
                write!(f, "Unknown panic, received: {rendered}")
            }
            Error::External { message, .. } => f.write_str(message),
        }
    }
}
