//! Folding, predicates and numeric summaries.
//!
//! Empty input policy: `reduce` answers `None`; `fold` returns its seed;
//! `all`/`none` are vacuously true and `any` is false. An absent slice
//! behaves exactly like an empty one.

fn items<T>(list: Option<&[T]>) -> &[T] {
    list.unwrap_or(&[])
}

pub fn fold<T, R, F: FnMut(R, &T) -> R>(list: Option<&[T]>, initial: R, operation: F) -> R {
    items(list).iter().fold(initial, operation)
}

pub fn fold_indexed<T, R, F: FnMut(usize, R, &T) -> R>(list: Option<&[T]>, initial: R, mut operation: F) -> R {
    items(list)
        .iter()
        .enumerate()
        .fold(initial, |acc, (i, item)| operation(i, acc, item))
}

/// Fold from the last element to the first.
pub fn fold_right<T, R, F: FnMut(&T, R) -> R>(list: Option<&[T]>, initial: R, mut operation: F) -> R {
    items(list)
        .iter()
        .rev()
        .fold(initial, |acc, item| operation(item, acc))
}

pub fn fold_right_indexed<T, R, F: FnMut(usize, &T, R) -> R>(
    list: Option<&[T]>,
    initial: R,
    mut operation: F,
) -> R {
    items(list)
        .iter()
        .enumerate()
        .rev()
        .fold(initial, |acc, (i, item)| operation(i, item, acc))
}

/// Combine left to right starting from the first element; `None` when empty.
pub fn reduce<T: Clone, F: FnMut(T, &T) -> T>(list: Option<&[T]>, operation: F) -> Option<T> {
    let (first, rest) = items(list).split_first()?;
    Some(rest.iter().fold(first.clone(), operation))
}

pub fn all<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, predicate: P) -> bool {
    items(list).iter().all(predicate)
}

pub fn any<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, predicate: P) -> bool {
    items(list).iter().any(predicate)
}

pub fn none<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, predicate: P) -> bool {
    !any(list, predicate)
}

pub fn count<T>(list: Option<&[T]>) -> usize {
    items(list).len()
}

pub fn count_by<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> usize {
    items(list).iter().filter(|item| predicate(item)).count()
}

pub fn max_or_null<T: Ord>(list: Option<&[T]>) -> Option<&T> {
    items(list).iter().max()
}

pub fn min_or_null<T: Ord>(list: Option<&[T]>) -> Option<&T> {
    items(list).iter().min()
}

/// Element with the largest key; the first one wins a tie.
pub fn max_by_or_null<T, K: Ord, F: FnMut(&T) -> K>(list: Option<&[T]>, mut selector: F) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items(list) {
        let key = selector(item);
        if best.as_ref().map_or(true, |(_, k)| key > *k) {
            best = Some((item, key));
        }
    }
    best.map(|(item, _)| item)
}

/// Element with the smallest key; the first one wins a tie.
pub fn min_by_or_null<T, K: Ord, F: FnMut(&T) -> K>(list: Option<&[T]>, mut selector: F) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items(list) {
        let key = selector(item);
        if best.as_ref().map_or(true, |(_, k)| key < *k) {
            best = Some((item, key));
        }
    }
    best.map(|(item, _)| item)
}

/// Wraps on overflow, like JVM `Int` arithmetic.
pub fn sum_of_int<T, F: FnMut(&T) -> i32>(list: Option<&[T]>, mut selector: F) -> i32 {
    items(list)
        .iter()
        .fold(0i32, |acc, item| acc.wrapping_add(selector(item)))
}

/// Wraps on overflow, like JVM `Long` arithmetic.
pub fn sum_of_long<T, F: FnMut(&T) -> i64>(list: Option<&[T]>, mut selector: F) -> i64 {
    items(list)
        .iter()
        .fold(0i64, |acc, item| acc.wrapping_add(selector(item)))
}

pub fn sum_of_double<T, F: FnMut(&T) -> f64>(list: Option<&[T]>, selector: F) -> f64 {
    items(list).iter().map(selector).sum()
}

/// Mean of the selected values; `0.0` for an empty or absent slice.
pub fn average_of_int<T, F: FnMut(&T) -> i32>(list: Option<&[T]>, selector: F) -> f64 {
    let list = items(list);
    if list.is_empty() {
        return 0.0;
    }
    let total: i64 = list.iter().map(selector).map(i64::from).sum();
    total as f64 / list.len() as f64
}

pub fn for_each<T, F: FnMut(&T)>(list: Option<&[T]>, action: F) {
    items(list).iter().for_each(action);
}

pub fn for_each_indexed<T, F: FnMut(usize, &T)>(list: Option<&[T]>, mut action: F) {
    for (i, item) in items(list).iter().enumerate() {
        action(i, item);
    }
}

/// Run `action` on every element and hand back a copy of the input.
pub fn on_each<T: Clone, F: FnMut(&T)>(list: Option<&[T]>, action: F) -> Vec<T> {
    for_each(list, action);
    items(list).to_vec()
}

pub fn on_each_indexed<T: Clone, F: FnMut(usize, &T)>(list: Option<&[T]>, action: F) -> Vec<T> {
    for_each_indexed(list, action);
    items(list).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_and_reduce() {
        let v = vec![1, 2, 3, 4];
        let s = Some(v.as_slice());
        assert_eq!(fold(s, 0, |acc, x| acc + x), 10);
        assert_eq!(reduce(s, |a, b| a + b), Some(10));
        assert_eq!(reduce::<i32, _>(Some(&[]), |a, b| a + b), None);
        assert_eq!(reduce::<i32, _>(None, |a, b| a + b), None);
        assert_eq!(fold(None::<&[i32]>, 7, |acc, x| acc + x), 7);
    }

    #[test]
    fn right_and_indexed_folds() {
        let v = vec!["a", "b", "c"];
        let s = Some(v.as_slice());
        assert_eq!(fold_right(s, String::new(), |x, acc| acc + *x), "cba");
        assert_eq!(
            fold_indexed(s, String::new(), |i, acc, x| format!("{}{}{}", acc, i, x)),
            "0a1b2c"
        );
        assert_eq!(
            fold_right_indexed(s, String::new(), |i, x, acc| format!("{}{}{}", acc, i, x)),
            "2c1b0a"
        );
    }

    #[test]
    fn sums_wrap_on_overflow() {
        let ints = [i32::MAX, 1];
        assert_eq!(sum_of_int(Some(&ints[..]), |x| *x), i32::MIN);
        let longs = [i64::MIN, -1];
        assert_eq!(sum_of_long(Some(&longs[..]), |x| *x), i64::MAX);
        assert_eq!(average_of_int(Some(&ints[..]), |x| *x), (i32::MAX as f64 + 1.0) / 2.0);
    }

    #[test]
    fn vacuous_predicates() {
        let empty: &[i32] = &[];
        assert!(all(Some(empty), |_| false));
        assert!(none(Some(empty), |_| true));
        assert!(!any(Some(empty), |_| true));
        assert!(all(None::<&[i32]>, |_| false));
    }

    #[test]
    fn counting_and_extremes() {
        let v = vec![3, 9, 1, 9];
        let s = Some(v.as_slice());
        assert_eq!(count(s), 4);
        assert_eq!(count_by(s, |x| *x == 9), 2);
        assert_eq!(max_or_null(s), Some(&9));
        assert_eq!(min_or_null(s), Some(&1));
        assert_eq!(max_or_null::<i32>(Some(&[])), None);
    }

    #[test]
    fn extremes_by_key_keep_first_tie() {
        let words = vec!["bb", "a", "cc", "d"];
        let s = Some(words.as_slice());
        assert_eq!(max_by_or_null(s, |w| w.len()), Some(&"bb"));
        assert_eq!(min_by_or_null(s, |w| w.len()), Some(&"a"));
        assert_eq!(min_by_or_null(None::<&[&str]>, |w| w.len()), None);
    }

    #[test]
    fn sums_and_average() {
        let v = vec![1, 2, 3, 4];
        let s = Some(v.as_slice());
        assert_eq!(sum_of_int(s, |x| *x), 10);
        assert_eq!(sum_of_long(s, |x| *x as i64 * 1_000_000_000), 10_000_000_000);
        assert_eq!(sum_of_double(s, |x| *x as f64 / 2.0), 5.0);
        assert_eq!(average_of_int(s, |x| *x), 2.5);
        assert_eq!(average_of_int(None::<&[i32]>, |x| *x), 0.0);
    }

    #[test]
    fn on_each_returns_copy() {
        let v = vec![1, 2];
        let mut seen = Vec::new();
        let copy = on_each(Some(v.as_slice()), |x| seen.push(*x));
        assert_eq!(copy, v);
        assert_eq!(seen, v);
    }
}
