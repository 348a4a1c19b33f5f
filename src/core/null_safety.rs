//! Absence handling without ad hoc `match` blocks.
//!
//! Every helper here is total except `require_not_null`, `check_not_null`
//! and `require_cast`, which return an [`Error`](crate::Error) instead of
//! substituting a value.
//!
//! Absence always sorts before any present value in [`safe_compare_to`].

mod arith;
mod cast;
mod guard;
mod wrapper;

pub use arith::NullSafeNum;
pub use cast::{kind_of, CastTarget};
pub use guard::{Failure, Outcome};
pub use wrapper::Wrapper;

use crate::error::{Error, Result};
use crate::utils::validation;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::Display;

// ============================================================================
// Basic checks
// ============================================================================

pub fn is_null<T>(value: Option<T>) -> bool {
    value.is_none()
}

pub fn is_not_null<T>(value: Option<T>) -> bool {
    value.is_some()
}

/// Return the value, or fail with a precondition error carrying `message`.
pub fn require_not_null<T>(value: Option<T>, message: &str) -> Result<T> {
    validation::require(value, message)
}

pub fn require_not_null_with<T, F>(value: Option<T>, lazy_message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| Error::precondition_required_value(lazy_message()))
}

/// Like [`require_not_null`], but reports an illegal-state error.
pub fn check_not_null<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| Error::state_required_value(message))
}

pub fn check_not_null_with<T, F>(value: Option<T>, lazy_message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| Error::state_required_value(lazy_message()))
}

// ============================================================================
// Defaults
// ============================================================================

pub fn or_else_value<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

pub fn or_default<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

pub fn or_else_nullable<T>(value: Option<T>, fallback: Option<T>) -> Option<T> {
    value.or(fallback)
}

/// The supplier only runs when `value` is absent.
pub fn or_else_get<T, F: FnOnce() -> T>(value: Option<T>, supplier: F) -> T {
    value.unwrap_or_else(supplier)
}

pub fn or_else_err<T, E, F: FnOnce() -> E>(value: Option<T>, err: F) -> std::result::Result<T, E> {
    value.ok_or_else(err)
}

pub fn or_zero<T: NullSafeNum>(value: Option<T>) -> T {
    value.unwrap_or(T::ZERO)
}

pub fn or_false(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

pub fn or_true(value: Option<bool>) -> bool {
    value.unwrap_or(true)
}

pub fn or_empty<'a>(value: impl Into<Option<&'a str>>) -> &'a str {
    value.into().unwrap_or("")
}

// ============================================================================
// Safe chaining
// ============================================================================

pub fn safe_let<T, R, F: FnOnce(T) -> R>(value: Option<T>, transform: F) -> Option<R> {
    value.map(transform)
}

pub fn let_or_default<T, R, F: FnOnce(T) -> R>(value: Option<T>, transform: F, default: R) -> R {
    value.map(transform).unwrap_or(default)
}

pub fn let_or_else_get<T, R, F, D>(value: Option<T>, transform: F, default: D) -> R
where
    F: FnOnce(T) -> R,
    D: FnOnce() -> R,
{
    value.map_or_else(default, transform)
}

pub fn safe_let2<A, B, R, F>(a: Option<A>, b: Option<B>, block: F) -> Option<R>
where
    F: FnOnce(A, B) -> R,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(block(a, b)),
        _ => None,
    }
}

pub fn safe_let3<A, B, C, R, F>(a: Option<A>, b: Option<B>, c: Option<C>, block: F) -> Option<R>
where
    F: FnOnce(A, B, C) -> R,
{
    match (a, b, c) {
        (Some(a), Some(b), Some(c)) => Some(block(a, b, c)),
        _ => None,
    }
}

pub fn safe_let_or_default2<A, B, R, F>(a: Option<A>, b: Option<B>, default: R, block: F) -> R
where
    F: FnOnce(A, B) -> R,
{
    safe_let2(a, b, block).unwrap_or(default)
}

/// Run `action` on the value if present and hand the value back.
pub fn safe_also<T, F: FnOnce(&T)>(value: Option<T>, action: F) -> Option<T> {
    if let Some(v) = &value {
        action(v);
    }
    value
}

pub fn safe_get<T, R, F: FnOnce(&T) -> R>(value: Option<&T>, property: F) -> Option<R> {
    value.map(property)
}

pub fn safe_get_or_default<T, R, F: FnOnce(&T) -> R>(value: Option<&T>, property: F, default: R) -> R {
    value.map(property).unwrap_or(default)
}

pub fn if_null<T, F: FnOnce()>(value: Option<T>, action: F) -> Option<T> {
    if value.is_none() {
        action();
    }
    value
}

pub fn if_not_null<T, F: FnOnce(&T)>(value: Option<T>, action: F) -> Option<T> {
    safe_also(value, action)
}

pub fn if_not_null_else<T, R, P, N>(value: Option<T>, present: P, absent: N) -> R
where
    P: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    match value {
        Some(v) => present(v),
        None => absent(),
    }
}

/// Thread `value` through `steps` in order, stopping at the first absent result.
pub fn safe_chain<T>(value: Option<T>, steps: &[&dyn Fn(T) -> Option<T>]) -> Option<T> {
    steps.iter().try_fold(value?, |acc, step| step(acc))
}

pub fn safe_chain_or_default<T>(value: Option<T>, default: T, steps: &[&dyn Fn(T) -> Option<T>]) -> T {
    safe_chain(value, steps).unwrap_or(default)
}

// ============================================================================
// Coalesce
// ============================================================================

/// First present value, scanning left to right and stopping at the first hit.
///
/// Pass a lazy iterator to defer evaluation of later candidates; the
/// [`coalesce!`](crate::coalesce) macro does the same for plain expressions.
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

pub fn coalesce_or_default<T, I>(values: I, default: T) -> T
where
    I: IntoIterator<Item = Option<T>>,
{
    coalesce(values).unwrap_or(default)
}

pub fn coalesce_or_else<T, I, F>(values: I, supplier: F) -> T
where
    I: IntoIterator<Item = Option<T>>,
    F: FnOnce() -> T,
{
    coalesce(values).unwrap_or_else(supplier)
}

// ============================================================================
// Casting
// ============================================================================

pub fn safe_cast<T: CastTarget>(value: Option<&Value>) -> Option<T> {
    value.and_then(T::from_value)
}

pub fn cast_or_default<T: CastTarget>(value: Option<&Value>, default: T) -> T {
    safe_cast(value).unwrap_or(default)
}

pub fn cast_or_else<T: CastTarget, F: FnOnce() -> T>(value: Option<&Value>, supplier: F) -> T {
    safe_cast(value).unwrap_or_else(supplier)
}

pub fn require_cast<T: CastTarget>(value: Option<&Value>) -> Result<T> {
    safe_cast(value).ok_or_else(|| Error::cast_mismatch(kind_of(value), T::KIND))
}

// ============================================================================
// Comparison and display
// ============================================================================

/// Two absences are equal; absent and present are not.
pub fn safe_equals<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Total order with absence first.
pub fn safe_compare_to<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

pub fn to_string<T: Display>(value: Option<T>) -> String {
    to_string_or_default(value, "null")
}

pub fn to_string_or_empty<T: Display>(value: Option<T>) -> String {
    to_string_or_default(value, "")
}

pub fn to_string_or_default<T: Display>(value: Option<T>, default: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}

// ============================================================================
// Lazy evaluation and failure capture
// ============================================================================
//
// "Failure" covers both `Err(_)` and a panic inside the closure.

/// Run `supplier`; failure or absence yields `default`.
pub fn lazy_or_default<O, F>(supplier: F, default: O::Value) -> O::Value
where
    O: Outcome,
    F: FnOnce() -> O,
{
    lazy_or_null(supplier).unwrap_or(default)
}

pub fn lazy_or_null<O, F>(supplier: F) -> Option<O::Value>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    guard::run(supplier).ok().flatten()
}

pub fn lazy_or_else<O, F, G>(supplier: F, fallback: G) -> O::Value
where
    O: Outcome,
    F: FnOnce() -> O,
    G: FnOnce() -> O::Value,
{
    lazy_or_null(supplier).unwrap_or_else(fallback)
}

/// Run `op`; on failure return `default`.
///
/// An `Ok(None)`-style absence is not a failure for `Result<Option<T>, _>`
/// closures: the inner `Option` is the value.
pub fn try_or_default<O, F>(default: O::Value, op: F) -> O::Value
where
    O: Outcome,
    F: FnOnce() -> O,
{
    try_or_null(op).unwrap_or(default)
}

pub fn try_or_default_with<O, F, E>(default: O::Value, op: F, on_error: E) -> O::Value
where
    O: Outcome,
    F: FnOnce() -> O,
    E: FnOnce(&Failure),
{
    try_or_null_with(op, on_error).unwrap_or(default)
}

pub fn try_or_null<O, F>(op: F) -> Option<O::Value>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    guard::run(op).ok().flatten()
}

/// Like [`try_or_null`], reporting the failure to `on_error` first.
pub fn try_or_null_with<O, F, E>(op: F, on_error: E) -> Option<O::Value>
where
    O: Outcome,
    F: FnOnce() -> O,
    E: FnOnce(&Failure),
{
    match guard::run(op) {
        Ok(value) => value,
        Err(failure) => {
            on_error(&failure);
            None
        }
    }
}

pub fn try_or_else<O, F, G>(op: F, fallback: G) -> O::Value
where
    O: Outcome,
    F: FnOnce() -> O,
    G: FnOnce() -> O::Value,
{
    try_or_null(op).unwrap_or_else(fallback)
}

/// Apply `transform`; a failing transform yields `None` instead of propagating.
pub fn try_map<T, O, F>(value: Option<T>, transform: F) -> Option<O::Value>
where
    O: Outcome,
    F: FnOnce(T) -> O,
{
    let value = value?;
    try_or_null(move || transform(value))
}

pub fn try_map_or_default<T, O, F>(value: Option<T>, default: O::Value, transform: F) -> O::Value
where
    O: Outcome,
    F: FnOnce(T) -> O,
{
    try_map(value, transform).unwrap_or(default)
}

// ============================================================================
// takeIf family
// ============================================================================

pub fn take_if<T, P: FnOnce(&T) -> bool>(value: Option<T>, predicate: P) -> Option<T> {
    value.filter(predicate)
}

pub fn take_unless<T, P: FnOnce(&T) -> bool>(value: Option<T>, predicate: P) -> Option<T> {
    value.filter(|v| !predicate(v))
}

pub fn take_if_not_empty<'a>(value: impl Into<Option<&'a str>>) -> Option<&'a str> {
    value.into().filter(|s| !s.is_empty())
}

pub fn take_if_not_blank<'a>(value: impl Into<Option<&'a str>>) -> Option<&'a str> {
    value.into().filter(|s| !s.trim().is_empty())
}

/// Keep the value when `min <= value <= max`.
pub fn take_if_in_range<T: PartialOrd>(value: Option<T>, min: T, max: T) -> Option<T> {
    value.filter(|v| *v >= min && *v <= max)
}

// ============================================================================
// Three-valued boolean logic
// ============================================================================
//
// Any absent operand makes the result absent.

pub fn null_safe_and(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    Some(a? && b?)
}

pub fn null_safe_or(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    Some(a? || b?)
}

pub fn null_safe_not(a: Option<bool>) -> Option<bool> {
    a.map(|v| !v)
}

pub fn null_safe_all(values: &[Option<bool>]) -> Option<bool> {
    values
        .iter()
        .try_fold(true, |acc, value| value.map(|v| acc && v))
}

pub fn null_safe_any(values: &[Option<bool>]) -> Option<bool> {
    values
        .iter()
        .try_fold(false, |acc, value| value.map(|v| acc || v))
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Absent operands count as zero. `None` only on overflow.
pub fn null_safe_plus<T: NullSafeNum>(a: Option<T>, b: Option<T>) -> Option<T> {
    or_zero(a).checked_add_val(or_zero(b))
}

/// Absent operands count as zero. `None` only on overflow.
pub fn null_safe_minus<T: NullSafeNum>(a: Option<T>, b: Option<T>) -> Option<T> {
    or_zero(a).checked_sub_val(or_zero(b))
}

pub fn null_safe_multiply<T: NullSafeNum>(a: Option<T>, b: Option<T>) -> Option<T> {
    a?.checked_mul_val(b?)
}

/// `None` when either operand is absent or the divisor is zero.
pub fn null_safe_divide<T: NullSafeNum>(a: Option<T>, b: Option<T>) -> Option<T> {
    a?.checked_div_val(b?)
}

// ============================================================================
// Wrapping
// ============================================================================

pub fn wrap<T>(value: Option<T>) -> Wrapper<T> {
    Wrapper::new(value)
}

pub fn wrap_if_not_null<T>(value: Option<T>) -> Wrapper<T> {
    Wrapper::new(value)
}

pub fn to_optional<T>(wrapper: Wrapper<T>) -> Option<T> {
    wrapper.or_null()
}

pub fn from_optional<T>(value: Option<T>) -> Wrapper<T> {
    Wrapper::from(value)
}
