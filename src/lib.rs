/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("config", "Ignoring {}: {}", path.display(), err);
/// log_status!("demo", "Rendering {} sections", count);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

/// First present value among the arguments, evaluated left to right.
///
/// Later expressions are not evaluated once a value is found.
///
/// ```
/// let name: Option<&str> = None;
/// assert_eq!(kotlinbridge::coalesce!(name, Some("first"), None), Some("first"));
/// ```
#[macro_export]
macro_rules! coalesce {
    ($($value:expr),+ $(,)?) => {
        'coalesce: {
            $(
                if let ::std::option::Option::Some(v) = $value {
                    break 'coalesce ::std::option::Option::Some(v);
                }
            )+
            ::std::option::Option::None
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `kotlinbridge::strings` instead of `kotlinbridge::core::strings`
pub use core::*;
pub use utils::*;
