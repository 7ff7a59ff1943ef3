//! Tests for writer options.

use crate::config::WriterOptions;
use crate::error::WriterError;

#[test]
fn test_default_options() {
    let options = WriterOptions::default();
    assert_eq!(options.enum_separator, ",");
    assert_eq!(options.enum_quote, "");
}

#[test]
fn test_parse_empty_yaml() {
    let options = WriterOptions::from_yaml("{}").unwrap();
    assert_eq!(options, WriterOptions::default());
}

#[test]
fn test_parse_partial_yaml() {
    let options = WriterOptions::from_yaml("enum_separator: ';'").unwrap();
    assert_eq!(options.enum_separator, ";");
    assert_eq!(options.enum_quote, "");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
enum_separator: ", "
enum_quote: "'"
"#;
    let options = WriterOptions::from_yaml(yaml).unwrap();
    assert_eq!(options.enum_separator, ", ");
    assert_eq!(options.enum_quote, "'");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let options = WriterOptions::from_yaml("enum_quote: '\"'\nfuture_option: 3").unwrap();
    assert_eq!(options.enum_quote, "\"");
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let err = WriterOptions::from_yaml("enum_separator: [unclosed").unwrap_err();
    assert!(matches!(err, WriterError::Program(_)));
}

#[test]
fn test_line_breaks_fail_validation() {
    let err = WriterOptions::from_yaml("enum_separator: \"\\n\"").unwrap_err();
    assert!(err.to_string().contains("enum_separator"));

    let options = WriterOptions::default().with_enum_quote("\r");
    assert!(options.validate().is_err());
}

#[test]
fn test_yaml_roundtrip() {
    let options = WriterOptions::default()
        .with_enum_separator(";")
        .with_enum_quote("`");
    let yaml = options.to_yaml().unwrap();
    assert_eq!(WriterOptions::from_yaml(&yaml).unwrap(), options);
}
