//! Total operations over possibly absent slices, maps and sets.
//!
//! Sequences are taken as `Option<&[T]>` and never mutated; every transform
//! returns a fresh `Vec`. Map and set helpers live in [`maps`] and [`sets`]
//! since they share names with the slice helpers.

mod access;
mod aggregate;
pub mod maps;
pub mod sets;
mod transform;

pub use access::*;
pub use aggregate::*;
pub use transform::*;

use crate::strings::{self, JoinOptions};
use std::fmt::Display;

pub fn is_null_or_empty<T>(list: Option<&[T]>) -> bool {
    list.map_or(true, <[T]>::is_empty)
}

pub fn is_not_null_or_empty<T>(list: Option<&[T]>) -> bool {
    !is_null_or_empty(list)
}

pub fn size_or_zero<T>(list: Option<&[T]>) -> usize {
    list.map_or(0, <[T]>::len)
}

/// An owned copy, empty when absent.
pub fn empty_if_null<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    list.map(<[T]>::to_vec).unwrap_or_default()
}

/// Borrowing counterpart of [`empty_if_null`].
pub fn or_empty<T>(list: Option<&[T]>) -> &[T] {
    list.unwrap_or(&[])
}

pub fn null_if_empty<T>(list: Option<&[T]>) -> Option<&[T]> {
    list.filter(|l| !l.is_empty())
}

/// Join the `Display` form of each element; `""` when absent.
pub fn join_to_string<T: Display>(list: Option<&[T]>, options: &JoinOptions) -> String {
    strings::join_to_string(list, options)
}

pub fn join_to_string_with<T, F: FnMut(&T) -> String>(
    list: Option<&[T]>,
    options: &JoinOptions,
    render: F,
) -> String {
    strings::join_to_string_with(list, options, render)
}
