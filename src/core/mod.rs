// Helper namespaces
pub mod collections;
pub mod null_safety;
pub mod strings;

// Report rendering and configuration
pub mod defaults;
pub mod error;
pub mod render;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
