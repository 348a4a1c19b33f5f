//! Set algebra over `Option<&BTreeSet<T>>`.
//!
//! Results iterate in element order, so identical inputs always produce the
//! same sequence.

use std::collections::BTreeSet;

pub fn is_null_or_empty<T>(set: Option<&BTreeSet<T>>) -> bool {
    set.map_or(true, BTreeSet::is_empty)
}

pub fn empty_if_null<T: Clone>(set: Option<&BTreeSet<T>>) -> BTreeSet<T> {
    set.cloned().unwrap_or_default()
}

pub fn null_if_empty<T>(set: Option<&BTreeSet<T>>) -> Option<&BTreeSet<T>> {
    set.filter(|s| !s.is_empty())
}

/// Absent operands count as empty.
pub fn union<T: Ord + Clone>(first: Option<&BTreeSet<T>>, second: Option<&BTreeSet<T>>) -> BTreeSet<T> {
    first
        .into_iter()
        .chain(second)
        .flatten()
        .cloned()
        .collect()
}

/// Empty when either operand is absent.
pub fn intersect<T: Ord + Clone>(first: Option<&BTreeSet<T>>, second: Option<&BTreeSet<T>>) -> BTreeSet<T> {
    match (first, second) {
        (Some(a), Some(b)) => a.intersection(b).cloned().collect(),
        _ => BTreeSet::new(),
    }
}

/// Elements of `first` missing from `second`; an absent `second` removes nothing.
pub fn subtract<T: Ord + Clone>(first: Option<&BTreeSet<T>>, second: Option<&BTreeSet<T>>) -> BTreeSet<T> {
    match (first, second) {
        (None, _) => BTreeSet::new(),
        (Some(a), None) => a.clone(),
        (Some(a), Some(b)) => a.difference(b).cloned().collect(),
    }
}

pub fn plus<T: Ord + Clone>(set: Option<&BTreeSet<T>>, element: T) -> BTreeSet<T> {
    let mut out = empty_if_null(set);
    out.insert(element);
    out
}

pub fn plus_all<T: Ord + Clone>(set: Option<&BTreeSet<T>>, elements: Option<&BTreeSet<T>>) -> BTreeSet<T> {
    union(set, elements)
}

pub fn minus<T: Ord + Clone>(set: Option<&BTreeSet<T>>, element: &T) -> BTreeSet<T> {
    let mut out = empty_if_null(set);
    out.remove(element);
    out
}

pub fn set_of_not_null<T: Ord, I>(elements: I) -> BTreeSet<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    elements.into_iter().flatten().collect()
}
