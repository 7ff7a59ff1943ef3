//! Option parsing, validation, and builder helpers.

use super::model::WriterOptions;
use crate::error::{Result, WriterError};

impl WriterOptions {
    /// Parse options from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: WriterOptions = serde_yaml::from_str(yaml)
            .map_err(|e| WriterError::Program(format!("failed to parse writer options: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Serialize options to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            WriterError::Program(format!("failed to serialize writer options: {}", e))
        })
    }

    /// Reject values that would split one logical line into several.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("enum_separator", &self.enum_separator),
            ("enum_quote", &self.enum_quote),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(WriterError::Program(format!(
                    "option validation failed: {} must not contain line breaks",
                    field
                )));
            }
        }
        Ok(())
    }

    pub fn with_enum_separator(mut self, separator: impl Into<String>) -> Self {
        self.enum_separator = separator.into();
        self
    }

    pub fn with_enum_quote(mut self, quote: impl Into<String>) -> Self {
        self.enum_quote = quote.into();
        self
    }
}
