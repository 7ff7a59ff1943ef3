//! WriterOptions struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Separator placed between collection items.
pub const DEFAULT_ENUM_SEPARATOR: &str = ",";

/// Quote placed around each collection item.
pub const DEFAULT_ENUM_QUOTE: &str = "";

/// Options fixed for the lifetime of a writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Separator used when a collection is written as one line.
    #[serde(default = "default_enum_separator")]
    pub enum_separator: String,

    /// Quote written before and after each collection item.
    #[serde(default = "default_enum_quote")]
    pub enum_quote: String,
}

fn default_enum_separator() -> String {
    DEFAULT_ENUM_SEPARATOR.to_string()
}

fn default_enum_quote() -> String {
    DEFAULT_ENUM_QUOTE.to_string()
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            enum_separator: default_enum_separator(),
            enum_quote: default_enum_quote(),
        }
    }
}
