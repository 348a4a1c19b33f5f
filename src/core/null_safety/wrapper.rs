use crate::error::{Error, Result};

/// A two-state holder: present with a value, or empty.
///
/// `map`, `flat_map` and `filter` never invoke their closure on an empty
/// wrapper, and invoke it exactly once, eagerly, on a present one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wrapper<T> {
    value: Option<T>,
}

impl<T> Default for Wrapper<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Wrapper<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Wrapper<T>> for Option<T> {
    fn from(wrapper: Wrapper<T>) -> Self {
        wrapper.value
    }
}

impl<T> Wrapper<T> {
    pub fn new(value: Option<T>) -> Self {
        Self { value }
    }

    pub fn present(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn empty() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Wrapper<&T> {
        Wrapper {
            value: self.value.as_ref(),
        }
    }

    /// Unwrap, failing with `NoSuchElement` when empty.
    pub fn get(self) -> Result<T> {
        self.value
            .ok_or_else(|| Error::no_such_element("No value present"))
    }

    pub fn or_null(self) -> Option<T> {
        self.value
    }

    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.value.unwrap_or_else(supplier)
    }

    pub fn or_else_err<E, F: FnOnce() -> E>(self, err: F) -> std::result::Result<T, E> {
        self.value.ok_or_else(err)
    }

    pub fn map<R, F: FnOnce(T) -> R>(self, mapper: F) -> Wrapper<R> {
        Wrapper {
            value: self.value.map(mapper),
        }
    }

    pub fn flat_map<R, F: FnOnce(T) -> Wrapper<R>>(self, mapper: F) -> Wrapper<R> {
        match self.value {
            Some(value) => mapper(value),
            None => Wrapper::empty(),
        }
    }

    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Wrapper<T> {
        Wrapper {
            value: self.value.filter(predicate),
        }
    }

    pub fn if_present<F: FnOnce(&T)>(self, action: F) -> Self {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    pub fn if_empty<F: FnOnce()>(self, action: F) -> Self {
        if self.value.is_none() {
            action();
        }
        self
    }

    pub fn fold<R, E, P>(self, if_empty: E, if_present: P) -> R
    where
        E: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self.value {
            Some(value) => if_present(value),
            None => if_empty(),
        }
    }

    /// Observe the held value (or its absence) without consuming it.
    pub fn peek<F: FnOnce(Option<&T>)>(self, action: F) -> Self {
        action(self.value.as_ref());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::cell::Cell;

    #[test]
    fn map_skips_empty() {
        let calls = Cell::new(0);
        let mapped = Wrapper::<i32>::empty().map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert!(mapped.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_runs_once_on_present() {
        let calls = Cell::new(0);
        let mapped = Wrapper::present(21).map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.or_null(), Some(42));
    }

    #[test]
    fn get_on_empty_fails() {
        let err = Wrapper::<String>::empty().get().unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSuchElement);
    }

    #[test]
    fn filter_and_flat_map() {
        let even = Wrapper::present(4).filter(|v| v % 2 == 0);
        assert_eq!(even.clone().or_null(), Some(4));
        assert!(Wrapper::present(3).filter(|v| v % 2 == 0).is_empty());

        let chained = even.flat_map(|v| Wrapper::present(v + 1));
        assert_eq!(chained.or_null(), Some(5));
    }

    #[test]
    fn fold_and_hooks() {
        let seen = Cell::new(false);
        let w = Wrapper::<i32>::empty().if_empty(|| seen.set(true));
        assert!(seen.get());
        assert_eq!(w.fold(|| "none".to_string(), |v| v.to_string()), "none");

        let peeked = Cell::new(None);
        let w = Wrapper::present(7).peek(|v| peeked.set(v.copied()));
        assert_eq!(peeked.get(), Some(7));
        assert_eq!(w.or_else(0), 7);
    }

    #[test]
    fn converts_to_and_from_option() {
        let w: Wrapper<u8> = Some(1).into();
        let back: Option<u8> = w.into();
        assert_eq!(back, Some(1));
    }
}
