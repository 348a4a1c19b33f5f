//! Input validation primitives.
//!
//! Provides ergonomic helpers for common validation patterns:
//! - Unwrapping Option values with descriptive errors
//! - Clamping numeric inputs into a range instead of rejecting them
//!
//! These replace verbose ok_or_else + Error constructor chains.

use crate::error::{Error, Result};

/// Require an Option to contain a value.
///
/// Replaces the common pattern:
/// ```ignore
/// value.ok_or_else(|| Error::precondition_required_value("msg"))?
/// ```
///
/// With:
/// ```ignore
/// validation::require(value, "msg")?
/// ```
pub fn require<T>(opt: Option<T>, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::precondition_required_value(message))
}

/// Clamp `value` into `[min, max]`.
///
/// When `min > max` the bounds are swapped rather than panicking like
/// `Ord::clamp` would.
pub fn coerce_in<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

pub fn coerce_at_least<T: PartialOrd>(value: T, min: T) -> T {
    if value < min {
        min
    } else {
        value
    }
}

pub fn coerce_at_most<T: PartialOrd>(value: T, max: T) -> T {
    if value > max {
        max
    } else {
        value
    }
}
