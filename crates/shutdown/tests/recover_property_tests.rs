//! Property tests for panic payload normalization

use farewell_shutdown::{func, recover, Error};
use proptest::prelude::*;
use rstest::rstest;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

fn caught<P: Any + Send + 'static>(payload: P) -> Option<Box<dyn Any + Send>> {
    let result: std::thread::Result<()> =
        panic::catch_unwind(AssertUnwindSafe(move || panic::panic_any(payload)));
    result.err()
}

fn rethrown(payload: Box<dyn Any + Send>) -> Option<Box<dyn Any + Send>> {
    let result: std::thread::Result<()> =
        panic::catch_unwind(AssertUnwindSafe(move || panic::resume_unwind(payload)));
    result.err()
}

proptest! {
    #[test]
    fn text_payload_keeps_message(message in ".*") {
        let err = recover(caught(message.clone())).unwrap();
        prop_assert_eq!(err.to_string(), message);
    }

    #[test]
    fn error_payload_is_returned_itself(message in "[a-z ]{0,32}") {
        let original = Error::handler(message);
        let err = recover(caught(original.clone())).unwrap();
        prop_assert!(err.same(&original));
    }

    #[test]
    fn integer_payload_is_rendered(value in any::<i64>()) {
        let err = recover(caught(value)).unwrap();
        prop_assert_eq!(err.to_string(), format!("Unknown panic, received: {value}"));
    }

    #[test]
    fn wrapped_panic_matches_normalizer(message in "[a-zA-Z0-9 ]{1,32}") {
        let payload = message.clone();
        let mut handler = func(move || panic::panic_any(payload.clone()));
        prop_assert_eq!(handler().unwrap_err().to_string(), message);
    }
}

#[rstest]
#[case::int(Box::new(123_i32), "Unknown panic, received: 123")]
#[case::unsigned(Box::new(42_usize), "Unknown panic, received: 42")]
#[case::boolean(Box::new(true), "Unknown panic, received: true")]
#[case::character(Box::new('x'), "Unknown panic, received: x")]
#[case::float(Box::new(2.5_f32), "Unknown panic, received: 2.5")]
#[case::unit(Box::new(()), "Unknown panic, received: Box<dyn Any>")]
#[case::vector(Box::new(vec![1, 2]), "Unknown panic, received: Box<dyn Any>")]
fn test_unknown_payload_rendering(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
    let err = recover(rethrown(payload)).unwrap();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_static_str_payload() {
    let err = recover(caught("internal error")).unwrap();
    assert_eq!(err.to_string(), "internal error");
    assert!(matches!(err, Error::Panic { .. }));
}

#[test]
fn test_boxed_std_error_payload() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "broken pipe".into();
    let err = recover(caught(boxed)).unwrap();
    assert!(matches!(err, Error::External { .. }));
    assert_eq!(err.to_string(), "broken pipe");
}
