//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `parser` - Order-preserving de-duplication and line splitting
//! - `validation` - Argument checks and range coercion

pub mod io;
pub mod parser;
pub mod validation;
