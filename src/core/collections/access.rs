//! Index and search access that never panics on an absent slice or a bad index.

pub fn get_or_null<T>(list: Option<&[T]>, index: usize) -> Option<&T> {
    list?.get(index)
}

pub fn get_or_default<T: Clone>(list: Option<&[T]>, index: usize, default: T) -> T {
    get_or_null(list, index).cloned().unwrap_or(default)
}

/// Element at `index`, or `default(index)` when out of range.
pub fn get_or_else<T: Clone, F: FnOnce(usize) -> T>(list: Option<&[T]>, index: usize, default: F) -> T {
    get_or_null(list, index)
        .cloned()
        .unwrap_or_else(|| default(index))
}

pub fn first_or_null<T>(list: Option<&[T]>) -> Option<&T> {
    list?.first()
}

pub fn first_or_default<T: Clone>(list: Option<&[T]>, default: T) -> T {
    first_or_null(list).cloned().unwrap_or(default)
}

pub fn last_or_null<T>(list: Option<&[T]>) -> Option<&T> {
    list?.last()
}

pub fn last_or_default<T: Clone>(list: Option<&[T]>, default: T) -> T {
    last_or_null(list).cloned().unwrap_or(default)
}

pub fn find_first_or_null<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Option<&T> {
    list?.iter().find(|item| predicate(item))
}

pub fn find_last_or_null<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, mut predicate: P) -> Option<&T> {
    list?.iter().rev().find(|item| predicate(item))
}

pub fn index_of_or_null<T: PartialEq>(list: Option<&[T]>, element: &T) -> Option<usize> {
    list?.iter().position(|item| item == element)
}

pub fn index_of_first_or_null<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, predicate: P) -> Option<usize> {
    list?.iter().position(predicate)
}

pub fn index_of_last_or_null<T, P: FnMut(&T) -> bool>(list: Option<&[T]>, predicate: P) -> Option<usize> {
    list?.iter().rposition(predicate)
}

/// First element; `None` for an absent or empty slice.
pub fn head<T>(list: Option<&[T]>) -> Option<&T> {
    first_or_null(list)
}

/// Last element; `None` for an absent or empty slice.
pub fn last<T>(list: Option<&[T]>) -> Option<&T> {
    last_or_null(list)
}

/// Everything but the first element.
pub fn tail<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    list.and_then(|l| l.get(1..)).map(<[T]>::to_vec).unwrap_or_default()
}

/// Everything but the last element.
pub fn init<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    list.and_then(|l| l.split_last())
        .map(|(_, rest)| rest.to_vec())
        .unwrap_or_default()
}

/// `list[from..to]` with both bounds clamped to the slice; `from > to` is empty.
pub fn sub_list<T: Clone>(list: Option<&[T]>, from: usize, to: usize) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    let from = from.min(list.len());
    let to = to.min(list.len());
    list.get(from..to).map(<[T]>::to_vec).unwrap_or_default()
}
