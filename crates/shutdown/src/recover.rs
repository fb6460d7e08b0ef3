//! Panic payload normalization
//!
//! A caught panic hands back an opaque `Box<dyn Any + Send>`. The functions
//! here turn that payload into an [`Error`] so it can travel through the same
//! reporting path as an ordinary handler failure.

use farewell_core::Error;
use std::any::Any;

/// Payload returned by [`std::panic::catch_unwind`]
pub type PanicPayload = Box<dyn Any + Send>;

/// Placeholder rendering for payloads that cannot be displayed
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Convert an optional panic payload into an optional error.
///
/// `None` means nothing panicked and yields no error.
pub fn recover(payload: Option<PanicPayload>) -> Option<Error> {
    payload.map(from_panic_payload)
}

/// Convert a panic payload into an error.
///
/// - an [`Error`] payload is returned as is, so it stays [`Error::same`] as
///   the value that was passed to `panic_any`
/// - `anyhow::Error` and boxed std errors are wrapped
/// - text payloads become an error with exactly that message
/// - anything else becomes `Unknown panic, received: <value>`
pub fn from_panic_payload(payload: PanicPayload) -> Error {
    let payload = match payload.downcast::<Error>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<anyhow::Error>() {
        Ok(error) => return Error::from(*error),
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
        Ok(error) => return Error::from(*error),
        Err(payload) => payload,
    };

    if let Some(message) = payload.downcast_ref::<&str>() {
        return Error::panic(*message);
    }

    match payload.downcast::<String>() {
        Ok(message) => Error::panic(*message),
        Err(payload) => Error::unknown_panic(render(payload.as_ref())),
    }
}

/// Render a payload of unrecognized type for the error message.
fn render(payload: &(dyn Any + Send)) -> String {
    macro_rules! display_scalars {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(value) = payload.downcast_ref::<$ty>() {
                    return value.to_string();
                }
            )*
        };
    }

    display_scalars!(
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    );

    OPAQUE_PAYLOAD.to_string()
}
