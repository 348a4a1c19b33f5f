use kotlinbridge::null_safety::{self, Failure, Wrapper};
use kotlinbridge::ErrorCode;
use serde_json::json;
use std::cell::Cell;

#[test]
fn require_and_check_report_distinct_codes() {
    assert_eq!(null_safety::require_not_null(Some(1), "gone").unwrap(), 1);

    let required = null_safety::require_not_null(None::<i32>, "id was null").unwrap_err();
    assert_eq!(required.code, ErrorCode::PreconditionRequiredValue);
    assert_eq!(required.message, "id was null");

    let checked = null_safety::check_not_null(None::<i32>, "cache was null").unwrap_err();
    assert_eq!(checked.code, ErrorCode::StateRequiredValue);
}

#[test]
fn lazy_message_is_built_only_on_absence() {
    let calls = Cell::new(0);
    let message = || {
        calls.set(calls.get() + 1);
        "missing".to_string()
    };

    assert!(null_safety::require_not_null_with(Some(1), message).is_ok());
    assert_eq!(calls.get(), 0);
    assert!(null_safety::require_not_null_with(None::<i32>, message).is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
fn supplier_runs_only_when_absent() {
    let calls = Cell::new(0);
    let value = null_safety::or_else_get(Some("kept"), || {
        calls.set(calls.get() + 1);
        "computed"
    });
    assert_eq!(value, "kept");
    assert_eq!(calls.get(), 0);
}

#[test]
fn coalesce_macro_stops_evaluating_after_first_hit() {
    let calls = Cell::new(0);
    let expensive = || {
        calls.set(calls.get() + 1);
        Some(99)
    };

    let found = kotlinbridge::coalesce!(None, Some(1), expensive());
    assert_eq!(found, Some(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn casting_against_dynamic_values() {
    let text = json!("hello");
    let number = json!(123);

    assert_eq!(null_safety::safe_cast::<String>(Some(&text)), Some("hello".to_string()));
    assert_eq!(
        null_safety::cast_or_default(Some(&number), "default".to_string()),
        "default"
    );
    assert_eq!(null_safety::safe_cast::<i64>(None), None);

    let err = null_safety::require_cast::<bool>(Some(&number)).unwrap_err();
    assert_eq!(err.code, ErrorCode::CastMismatch);
    assert_eq!(err.details["expected"], "bool");
}

#[test]
fn try_helpers_absorb_errors_and_panics() {
    assert_eq!(null_safety::try_or_default(-1, || "abc".parse::<i32>()), -1);
    assert_eq!(null_safety::try_map(Some("123"), str::parse::<i32>), Some(123));
    assert_eq!(null_safety::try_map(Some("abc"), str::parse::<i32>), None);

    let mut seen = None;
    let value = null_safety::try_or_null_with(
        || -> Option<i32> { panic!("exploded") },
        |failure: &Failure| seen = Some(failure.clone()),
    );
    assert_eq!(value, None);
    assert_eq!(seen, Some(Failure::Panic("exploded".to_string())));
}

#[test]
fn three_valued_logic() {
    assert_eq!(null_safety::null_safe_and(Some(true), Some(false)), Some(false));
    assert_eq!(null_safety::null_safe_and(Some(false), None), None);
    assert_eq!(null_safety::null_safe_or(Some(true), None), None);
    assert_eq!(null_safety::null_safe_not(None), None);
    assert_eq!(null_safety::null_safe_all(&[Some(true), Some(true)]), Some(true));
    assert_eq!(null_safety::null_safe_any(&[Some(false), None]), None);
}

#[test]
fn arithmetic_on_optional_numbers() {
    assert_eq!(null_safety::null_safe_plus(Some(5), Some(3)), Some(8));
    assert_eq!(null_safety::null_safe_plus(Some(5), None), Some(5));
    assert_eq!(null_safety::null_safe_plus(Some(i32::MAX), Some(1)), None);
    assert_eq!(null_safety::null_safe_divide(Some(10), Some(0)), None);
    assert_eq!(null_safety::null_safe_multiply(Some(2.5), Some(2.0)), Some(5.0));
    assert_eq!(null_safety::or_zero(None::<f64>), 0.0);
}

#[test]
fn wrapper_map_runs_transform_at_most_once() {
    let calls = Cell::new(0);
    let upper = |s: &str| {
        calls.set(calls.get() + 1);
        s.to_uppercase()
    };

    assert_eq!(Wrapper::<&str>::empty().map(upper).or_null(), None);
    assert_eq!(calls.get(), 0);
    assert_eq!(null_safety::wrap(Some("hello")).map(upper).or_null(), Some("HELLO".to_string()));
    assert_eq!(calls.get(), 1);

    let err = Wrapper::<i32>::empty().get().unwrap_err();
    assert_eq!(err.code, ErrorCode::NoSuchElement);
}

#[test]
fn absence_sorts_first() {
    use std::cmp::Ordering;
    assert_eq!(null_safety::safe_compare_to(None, Some(i32::MIN)), Ordering::Less);
    assert_eq!(null_safety::safe_compare_to(Some(1), Some(2)), Ordering::Less);
    assert_eq!(null_safety::safe_compare_to::<i32>(None, None), Ordering::Equal);
}

#[test]
fn safe_chain_stops_at_first_absent_step() {
    let calls = Cell::new(0);
    let trim = |s: String| {
        calls.set(calls.get() + 1);
        Some(s.trim().to_string())
    };
    let non_empty = |s: String| {
        calls.set(calls.get() + 1);
        (!s.is_empty()).then_some(s)
    };
    let shout = |s: String| {
        calls.set(calls.get() + 1);
        Some(s.to_uppercase())
    };
    let steps: [&dyn Fn(String) -> Option<String>; 3] = [&trim, &non_empty, &shout];

    assert_eq!(null_safety::safe_chain(Some(" hi ".to_string()), &steps).as_deref(), Some("HI"));
    assert_eq!(calls.get(), 3);

    calls.set(0);
    assert_eq!(null_safety::safe_chain(Some("   ".to_string()), &steps), None);
    assert_eq!(calls.get(), 2);

    assert_eq!(null_safety::safe_chain(None, &steps), None);
    assert_eq!(calls.get(), 2);
    assert_eq!(
        null_safety::safe_chain_or_default(None, "none".to_string(), &steps),
        "none"
    );
    assert_eq!(null_safety::safe_chain(Some(7), &[]), Some(7));
}
