//! Placeholder interpolation for line and block templates.
//!
//! # Syntax
//!
//! - `%name` - Substitutes the value of argument `name`. The name is the
//!   longest run of ASCII letters, digits, and underscores after the `%`.
//! - `%%` - Renders as a literal `%`.
//!
//! Substitution happens in two passes: placeholders are replaced first,
//! skipping escaped `%%` pairs, then every remaining `%%` collapses to `%`.
//!
//! # Missing arguments
//!
//! A placeholder without a matching argument renders as the empty string.
//! This is lenient on purpose; it never fails.

use crate::value::Args;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches an escaped percent or a placeholder. Escapes are consumed left to
/// right, so a `%` directly after `%%` starts a fresh placeholder.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%|%([A-Za-z0-9_]+)").expect("placeholder regex is valid"));

/// Interpolate `pattern` against `args`.
///
/// # Examples
///
/// ```
/// use fancy_writer::{args, interpolate};
///
/// let a = args([("speed", "quick"), ("color", "brown")]);
/// assert_eq!(interpolate("The %%speed %color fox", &a), "The %speed brown fox");
/// ```
pub fn interpolate(pattern: &str, args: &Args) -> String {
    let substituted = PLACEHOLDER.replace_all(pattern, |caps: &Captures<'_>| {
        match caps.get(1) {
            Some(name) => args
                .get(name.as_str())
                .map(ToString::to_string)
                .unwrap_or_default(),
            None => "%%".to_string(),
        }
    });
    substituted.replace("%%", "%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Value, args};

    fn fox_args() -> Args {
        args([("speed", "quick"), ("color", "brown")])
    }

    #[test]
    fn test_basic_interpolation() {
        assert_eq!(
            interpolate("The %speed %color fox", &fox_args()),
            "The quick brown fox"
        );
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(
            interpolate("The %%speed %color fox", &fox_args()),
            "The %speed brown fox"
        );
    }

    #[test]
    fn test_escaped_percent_at_start() {
        assert_eq!(
            interpolate("%%speed %color fox", &fox_args()),
            "%speed brown fox"
        );
    }

    #[test]
    fn test_placeholder_after_escape() {
        assert_eq!(interpolate("%%%speed", &fox_args()), "%quick");
    }

    #[test]
    fn test_double_escape_collapses_once() {
        assert_eq!(interpolate("100%%%% sure", &Args::new()), "100%% sure");
    }

    #[test]
    fn test_missing_argument_renders_empty() {
        assert_eq!(interpolate("Hi %who!", &Args::new()), "Hi !");
    }

    #[test]
    fn test_lone_percent_is_literal() {
        assert_eq!(interpolate("50% off", &Args::new()), "50% off");
        assert_eq!(interpolate("trailing %", &Args::new()), "trailing %");
    }

    #[test]
    fn test_name_is_maximal_word_run() {
        let a = args([("file", "mod_mime"), ("file_name", "other")]);
        assert_eq!(interpolate("modules/%file.so", &a), "modules/mod_mime.so");
        assert_eq!(interpolate("%file_name", &a), "other");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let a = args([("a", "A")]);
        assert_eq!(interpolate("%a-%a", &a), "A-A");
    }

    #[test]
    fn test_non_text_values_use_display() {
        let a = args([
            ("x", Value::from(4)),
            ("y", Value::from(2)),
            ("name", Value::from("node1")),
            ("label", Value::from("Source")),
        ]);
        assert_eq!(
            interpolate("\\node at (%x,%y) (%name) {%label};", &a),
            "\\node at (4,2) (node1) {Source};"
        );
    }

    #[test]
    fn test_substituted_percent_pairs_also_collapse() {
        let a = args([("rate", "10%%")]);
        assert_eq!(interpolate("rate=%rate", &a), "rate=10%");
    }

    #[test]
    fn test_unicode_surroundings() {
        let a = args([("who", "日本語")]);
        assert_eq!(interpolate("Hallo %who 🎉", &a), "Hallo 日本語 🎉");
    }
}
