//! Failure capture for the `try_*` and `lazy_*` helpers.
//!
//! A caller-supplied computation "fails" when it returns `Err(_)` or when it
//! panics. Both are folded into a [`Failure`] value so the helpers can
//! substitute a default instead of propagating.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Why a guarded computation produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The computation returned `Err(_)`; holds its display form.
    Error(String),
    /// The computation panicked; holds the panic message when it was a string.
    Panic(String),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Failure::Error(message) | Failure::Panic(message) => message,
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panic(_))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Error(message) => write!(f, "error: {}", message),
            Failure::Panic(message) => write!(f, "panic: {}", message),
        }
    }
}

/// Return types a guarded closure may produce.
///
/// `Option<T>` reports absence, `Result<T, E>` reports failure through `Err`.
pub trait Outcome {
    type Value;

    fn into_outcome(self) -> Result<Option<Self::Value>, Failure>;
}

impl<T> Outcome for Option<T> {
    type Value = T;

    fn into_outcome(self) -> Result<Option<T>, Failure> {
        Ok(self)
    }
}

impl<T, E: fmt::Display> Outcome for Result<T, E> {
    type Value = T;

    fn into_outcome(self) -> Result<Option<T>, Failure> {
        self.map(Some).map_err(|e| Failure::Error(e.to_string()))
    }
}

/// Run `f`, converting an `Err` or a panic into [`Failure`].
pub(crate) fn run<O, F>(f: F) -> Result<Option<O::Value>, Failure>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome.into_outcome(),
        Err(payload) => Err(Failure::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
