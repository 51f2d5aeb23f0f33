//! Runtime type narrowing of outcome payloads.

use std::any::{Any, type_name};

use crate::{Payload, RailwayError, RailwayResult};

/// Move `payload` out as a `T` when its runtime type is `T`.
///
/// A payload whose static type is already `T` passes straight through. A
/// type-erased payload (`Box<dyn Any>`, optionally `+ Send` or
/// `+ Send + Sync`) is unboxed when the value inside is a `T`. The payload is
/// staged in an `Option` so both checks work on the value in place.
pub(crate) fn downcast<A: Any, T: Any>(payload: A, slot: Payload) -> RailwayResult<T> {
    let mut staged = Some(payload);
    let any: &mut dyn Any = &mut staged;
    if let Some(narrowed) = any.downcast_mut::<Option<T>>().and_then(Option::take) {
        return Ok(narrowed);
    }
    match take_erased(any).and_then(|erased| erased.downcast::<T>().ok()) {
        Some(narrowed) => Ok(*narrowed),
        None => {
            tracing::warn!(
                payload = %slot,
                actual = type_name::<A>(),
                target = type_name::<T>(),
                "rejected outcome cast"
            );
            Err(RailwayError::illegal_cast::<A, T>(slot))
        }
    }
}

/// Take the boxed value out of a staged `Option<Box<dyn Any ..>>`.
fn take_erased(staged: &mut dyn Any) -> Option<Box<dyn Any>> {
    if let Some(slot) = staged.downcast_mut::<Option<Box<dyn Any>>>() {
        return slot.take();
    }
    if let Some(slot) = staged.downcast_mut::<Option<Box<dyn Any + Send>>>() {
        return slot.take().map(|erased| erased as Box<dyn Any>);
    }
    staged
        .downcast_mut::<Option<Box<dyn Any + Send + Sync>>>()
        .and_then(Option::take)
        .map(|erased| erased as Box<dyn Any>)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests panic on broken fixtures")]
mod tests {
    use std::any::Any;

    use rstest::rstest;

    use super::downcast;
    use crate::{Payload, RailwayError};

    #[test]
    fn same_type_passes_through() {
        let narrowed: String = downcast(String::from("x"), Payload::Value).expect("same type");
        assert_eq!(narrowed, "x");
    }

    #[test]
    fn unrelated_type_is_rejected() {
        let err = downcast::<u32, i64>(7, Payload::Error).expect_err("unrelated type");
        assert_eq!(
            err,
            RailwayError::IllegalCast {
                payload: Payload::Error,
                actual: "u32",
                target: "i64",
            }
        );
    }

    #[rstest]
    fn erased_payloads_unbox_to_their_runtime_type() {
        let erased: Box<dyn Any> = Box::new(7_u32);
        assert_eq!(downcast::<_, u32>(erased, Payload::Value), Ok(7));

        let sendable: Box<dyn Any + Send> = Box::new(String::from("sent"));
        assert_eq!(
            downcast::<_, String>(sendable, Payload::Error),
            Ok(String::from("sent"))
        );

        let shared: Box<dyn Any + Send + Sync> = Box::new(3_i8);
        assert_eq!(downcast::<_, i8>(shared, Payload::Value), Ok(3));
    }

    #[rstest]
    fn erased_payloads_of_another_type_are_rejected() {
        let erased: Box<dyn Any> = Box::new(7_u32);
        let err = downcast::<_, i64>(erased, Payload::Value).expect_err("u32 inside");
        assert!(matches!(
            err,
            RailwayError::IllegalCast {
                payload: Payload::Value,
                target: "i64",
                ..
            }
        ));
    }

    #[rstest]
    fn erased_payloads_can_stay_erased() {
        let erased: Box<dyn Any> = Box::new(7_u32);
        let kept: Box<dyn Any> = downcast(erased, Payload::Value).expect("same static type");
        assert_eq!(kept.downcast_ref::<u32>(), Some(&7));
    }
}
