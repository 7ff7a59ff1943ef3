//! Writer configuration.
//!
//! [`WriterOptions`] holds the per-writer settings that are fixed at
//! construction. It can be built in code or parsed from YAML; unknown fields
//! are ignored and missing fields take their defaults.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{DEFAULT_ENUM_QUOTE, DEFAULT_ENUM_SEPARATOR, WriterOptions};
