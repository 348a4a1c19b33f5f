//! Order-preserving transforms that build a new `Vec` and never touch the input.

use crate::utils::{parser, validation};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::ops::Range;

fn items<T>(list: Option<&[T]>) -> &[T] {
    list.unwrap_or(&[])
}

// ============================================================================
// Slicing
// ============================================================================

pub fn take<T: Clone>(list: Option<&[T]>, n: usize) -> Vec<T> {
    let list = items(list);
    list[..n.min(list.len())].to_vec()
}

pub fn take_last<T: Clone>(list: Option<&[T]>, n: usize) -> Vec<T> {
    let list = items(list);
    list[list.len().saturating_sub(n)..].to_vec()
}

pub fn drop<T: Clone>(list: Option<&[T]>, n: usize) -> Vec<T> {
    let list = items(list);
    list[n.min(list.len())..].to_vec()
}

pub fn drop_last<T: Clone>(list: Option<&[T]>, n: usize) -> Vec<T> {
    let list = items(list);
    list[..list.len().saturating_sub(n)].to_vec()
}

pub fn take_while<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    items(list)
        .iter()
        .take_while(|item| predicate(item))
        .cloned()
        .collect()
}

/// Longest suffix whose elements all satisfy `predicate`.
pub fn take_last_while<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    let list = items(list);
    let start = list
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |i| i + 1);
    list[start..].to_vec()
}

pub fn drop_while<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    items(list)
        .iter()
        .skip_while(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn drop_last_while<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    let list = items(list);
    let end = list
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |i| i + 1);
    list[..end].to_vec()
}

/// Elements at `indices`, in the order given. Out-of-range indices are skipped.
pub fn slice<T: Clone>(list: Option<&[T]>, indices: &[usize]) -> Vec<T> {
    let list = items(list);
    indices
        .iter()
        .filter_map(|&i| list.get(i).cloned())
        .collect()
}

/// Elements in `range`, clamped to the slice.
pub fn slice_range<T: Clone>(list: Option<&[T]>, range: Range<usize>) -> Vec<T> {
    super::sub_list(list, range.start, range.end)
}

// ============================================================================
// Filtering
// ============================================================================

pub fn filter<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    items(list)
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn filter_not<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Vec<T> {
    filter(list, |item| !predicate(item))
}

pub fn filter_indexed<T: Clone, P: FnMut(usize, &T) -> bool>(
    list: Option<&[T]>,
    mut predicate: P,
) -> Vec<T> {
    items(list)
        .iter()
        .enumerate()
        .filter(|(i, item)| predicate(*i, item))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Drop absent elements only; present falsy values such as `0` or `""` stay.
pub fn filter_not_null<T: Clone>(list: Option<&[Option<T>]>) -> Vec<T> {
    items(list).iter().flatten().cloned().collect()
}

/// Collect the present arguments, in order.
pub fn list_of_not_null<T, I>(elements: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    elements.into_iter().flatten().collect()
}

// ============================================================================
// Mapping
// ============================================================================

pub fn map<T, R, F: FnMut(&T) -> R>(list: Option<&[T]>, transform: F) -> Vec<R> {
    items(list).iter().map(transform).collect()
}

pub fn map_indexed<T, R, F: FnMut(usize, &T) -> R>(list: Option<&[T]>, mut transform: F) -> Vec<R> {
    items(list)
        .iter()
        .enumerate()
        .map(|(i, item)| transform(i, item))
        .collect()
}

pub fn map_not_null<T, R, F: FnMut(&T) -> Option<R>>(list: Option<&[T]>, transform: F) -> Vec<R> {
    items(list).iter().filter_map(transform).collect()
}

pub fn flat_map<T, R, I, F>(list: Option<&[T]>, transform: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T) -> I,
{
    items(list).iter().flat_map(transform).collect()
}

pub fn flat_map_indexed<T, R, I, F>(list: Option<&[T]>, mut transform: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(usize, &T) -> I,
{
    items(list)
        .iter()
        .enumerate()
        .flat_map(|(i, item)| transform(i, item))
        .collect()
}

/// Concatenate the present inner lists.
pub fn flatten<T: Clone>(lists: Option<&[Option<Vec<T>>]>) -> Vec<T> {
    items(lists)
        .iter()
        .flatten()
        .flat_map(|inner| inner.iter().cloned())
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

pub fn sorted<T: Clone + Ord>(list: Option<&[T]>) -> Vec<T> {
    let mut out = items(list).to_vec();
    out.sort();
    out
}

pub fn sorted_descending<T: Clone + Ord>(list: Option<&[T]>) -> Vec<T> {
    sorted_with(list, |a, b| b.cmp(a))
}

/// Stable: equal keys keep their original relative order.
pub fn sorted_by<T: Clone, K: Ord, F: FnMut(&T) -> K>(list: Option<&[T]>, selector: F) -> Vec<T> {
    let mut out = items(list).to_vec();
    out.sort_by_key(selector);
    out
}

pub fn sorted_by_descending<T: Clone, K: Ord, F: FnMut(&T) -> K>(
    list: Option<&[T]>,
    mut selector: F,
) -> Vec<T> {
    sorted_with(list, |a, b| selector(b).cmp(&selector(a)))
}

pub fn sorted_with<T: Clone, F: FnMut(&T, &T) -> Ordering>(list: Option<&[T]>, comparator: F) -> Vec<T> {
    let mut out = items(list).to_vec();
    out.sort_by(comparator);
    out
}

pub fn reversed<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    items(list).iter().rev().cloned().collect()
}

/// First occurrence of each element wins.
pub fn distinct<T: Clone + Eq + Hash>(list: Option<&[T]>) -> Vec<T> {
    parser::dedupe(items(list).to_vec())
}

pub fn distinct_by<T: Clone, K: Eq + Hash, F: FnMut(&T) -> K>(list: Option<&[T]>, selector: F) -> Vec<T> {
    parser::dedupe_by(items(list).to_vec(), selector)
}

/// A shuffled copy drawn from the thread-local generator.
pub fn shuffled<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    shuffled_with(list, &mut rand::rng())
}

/// A shuffled copy drawn from `rng`, for reproducible orderings.
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(list: Option<&[T]>, rng: &mut R) -> Vec<T> {
    let mut out = items(list).to_vec();
    out.shuffle(rng);
    out
}

// ============================================================================
// Grouping
// ============================================================================

/// Keys come back in key order; each group keeps the input order.
pub fn group_by<T: Clone, K: Ord, F: FnMut(&T) -> K>(list: Option<&[T]>, key: F) -> BTreeMap<K, Vec<T>> {
    group_by_values(list, key, T::clone)
}

pub fn group_by_values<T, K, V, F, G>(list: Option<&[T]>, mut key: F, mut value: G) -> BTreeMap<K, Vec<V>>
where
    K: Ord,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> V,
{
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for item in items(list) {
        groups.entry(key(item)).or_default().push(value(item));
    }
    groups
}

/// One entry per key. A later element replaces an earlier one with the same key.
pub fn associate_by<T: Clone, K: Ord, F: FnMut(&T) -> K>(list: Option<&[T]>, key: F) -> BTreeMap<K, T> {
    associate_by_values(list, key, T::clone)
}

pub fn associate_by_values<T, K, V, F, G>(list: Option<&[T]>, mut key: F, mut value: G) -> BTreeMap<K, V>
where
    K: Ord,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> V,
{
    associate(list, |item| (key(item), value(item)))
}

/// Build a map from `(key, value)` pairs; later pairs win.
pub fn associate<T, K: Ord, V, F: FnMut(&T) -> (K, V)>(list: Option<&[T]>, transform: F) -> BTreeMap<K, V> {
    items(list).iter().map(transform).collect()
}

/// `(matching, rest)`, both in input order.
pub fn partition<T: Clone, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> (Vec<T>, Vec<T>) {
    items(list).iter().cloned().partition(|item| predicate(item))
}

// ============================================================================
// Windows and zipping
// ============================================================================

/// Consecutive groups of `size` (at least 1); the last may be shorter.
pub fn chunked<T: Clone>(list: Option<&[T]>, size: usize) -> Vec<Vec<T>> {
    let size = validation::coerce_at_least(size, 1);
    items(list).chunks(size).map(<[T]>::to_vec).collect()
}

/// Windows of `size` advancing by `step` (both at least 1). Short trailing
/// windows are included only with `partial_windows`.
pub fn windowed<T: Clone>(list: Option<&[T]>, size: usize, step: usize, partial_windows: bool) -> Vec<Vec<T>> {
    let size = validation::coerce_at_least(size, 1);
    let step = validation::coerce_at_least(step, 1);
    let list = items(list);

    let mut windows = Vec::new();
    let mut start = 0;
    while start < list.len() {
        let end = start.saturating_add(size);
        if end > list.len() {
            if partial_windows {
                windows.push(list[start..].to_vec());
            } else {
                break;
            }
        } else {
            windows.push(list[start..end].to_vec());
        }
        start = start.saturating_add(step);
    }
    windows
}

/// Positional pairs, truncated to the shorter input.
pub fn zip<A: Clone, B: Clone>(first: Option<&[A]>, second: Option<&[B]>) -> Vec<(A, B)> {
    zip_with(first, second, |a, b| (a.clone(), b.clone()))
}

pub fn zip_with<A, B, R, F: FnMut(&A, &B) -> R>(
    first: Option<&[A]>,
    second: Option<&[B]>,
    mut combine: F,
) -> Vec<R> {
    let (Some(first), Some(second)) = (first, second) else {
        return Vec::new();
    };
    first.iter().zip(second).map(|(a, b)| combine(a, b)).collect()
}

/// `combine` applied to each adjacent pair: `n - 1` results for `n` elements.
pub fn zip_with_next<T, R, F: FnMut(&T, &T) -> R>(list: Option<&[T]>, mut combine: F) -> Vec<R> {
    items(list)
        .windows(2)
        .map(|pair| combine(&pair[0], &pair[1]))
        .collect()
}
