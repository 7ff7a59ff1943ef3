//! Built-in operations reachable by name.
//!
//! This is the first tier of name resolution: these names always refer to
//! the writer's own operations, before any caller-context or template.

use super::Writer;
use crate::caller::Body;
use crate::error::{Result, WriterError};
use crate::templates::DEFAULT_BLOCK_INDENT;
use crate::value::Value;

/// Every name the built-in table answers to, aliases included.
pub const BUILTIN_OPERATIONS: &[&str] = &[
    "write",
    "w",
    "line",
    "write_enum",
    "e",
    "prepend",
    "comment",
    "c",
    "indent",
    "i",
    "tab_indent",
    "t",
    "block",
    "add_line_config",
    "add_block_config",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Builtin {
    Write,
    WriteEnum,
    Prepend,
    Comment,
    Indent,
    TabIndent,
    Block,
    AddLineConfig,
    AddBlockConfig,
}

impl Builtin {
    pub(super) fn lookup(name: &str) -> Option<Self> {
        match name {
            "write" | "w" | "line" => Some(Self::Write),
            "write_enum" | "e" => Some(Self::WriteEnum),
            "prepend" => Some(Self::Prepend),
            "comment" | "c" => Some(Self::Comment),
            "indent" | "i" => Some(Self::Indent),
            "tab_indent" | "t" => Some(Self::TabIndent),
            "block" => Some(Self::Block),
            "add_line_config" => Some(Self::AddLineConfig),
            "add_block_config" => Some(Self::AddBlockConfig),
            _ => None,
        }
    }
}

impl<'a> Writer<'a> {
    /// Run a built-in with positional arguments. `Null` arguments count as
    /// omitted and take the operation's default.
    pub(super) fn call_builtin(
        &mut self,
        builtin: Builtin,
        operation: &str,
        args: &[Value],
        body: Option<Body<'_, 'a>>,
    ) -> Result<Value> {
        match builtin {
            Builtin::Write => self.write_lines(args.iter().cloned())?,
            Builtin::WriteEnum => {
                let collection = required_arg(operation, args, 0, "collection")?;
                self.write_enum(collection.clone())?;
            }
            Builtin::Prepend => {
                let prefix = text_arg(operation, args, 0, " ")?;
                self.prepend(prefix, |w| run_body(w, body))?;
            }
            Builtin::Comment => {
                let marker = text_arg(operation, args, 0, super::DEFAULT_COMMENT_MARKER)?;
                let with_space = flag_arg(operation, args, 1, true)?;
                self.comment_with(&marker, with_space, |w| run_body(w, body))?;
            }
            Builtin::Indent => {
                let width = count_arg(operation, args, 0, 2)?;
                self.indent(width, |w| run_body(w, body))?;
            }
            Builtin::TabIndent => {
                let count = count_arg(operation, args, 0, 1)?;
                self.tab_indent(count, |w| run_body(w, body))?;
            }
            Builtin::Block => {
                let begin = required_arg(operation, args, 0, "begin text")?.to_string();
                let end = required_arg(operation, args, 1, "end text")?.to_string();
                let indent = count_arg(operation, args, 2, DEFAULT_BLOCK_INDENT)?;
                self.block_indented(&begin, &end, indent, |w| run_body(w, body))?;
            }
            Builtin::AddLineConfig => {
                let name = required_text(operation, args, 0, "template name")?;
                let pattern = required_text(operation, args, 1, "pattern")?;
                self.add_line_config(name, pattern);
            }
            Builtin::AddBlockConfig => {
                let name = required_text(operation, args, 0, "template name")?;
                let begin = required_text(operation, args, 1, "begin pattern")?;
                let end = required_text(operation, args, 2, "end pattern")?;
                let indent = count_arg(operation, args, 3, DEFAULT_BLOCK_INDENT)?;
                self.add_block_config(name, begin, end, indent);
            }
        }
        Ok(Value::Null)
    }
}

/// Run an optional body; a missing body is an empty one.
pub(super) fn run_body<'a>(writer: &mut Writer<'a>, body: Option<Body<'_, 'a>>) -> Result<()> {
    match body {
        Some(body) => body(writer),
        None => Ok(()),
    }
}

fn arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|value| !value.is_null())
}

fn required_arg<'v>(
    operation: &str,
    args: &'v [Value],
    index: usize,
    what: &str,
) -> Result<&'v Value> {
    arg(args, index).ok_or_else(|| {
        WriterError::invalid_argument(
            operation,
            format!("missing {} (argument {})", what, index + 1),
        )
    })
}

fn required_text(operation: &str, args: &[Value], index: usize, what: &str) -> Result<String> {
    match required_arg(operation, args, index, what)? {
        Value::Text(text) => Ok(text.clone()),
        other => Err(WriterError::invalid_argument(
            operation,
            format!("{} must be text, got '{}'", what, other),
        )),
    }
}

fn text_arg(operation: &str, args: &[Value], index: usize, default: &str) -> Result<String> {
    match arg(args, index) {
        None => Ok(default.to_string()),
        Some(Value::Text(text)) => Ok(text.clone()),
        Some(other) => Err(WriterError::invalid_argument(
            operation,
            format!("argument {} must be text, got '{}'", index + 1, other),
        )),
    }
}

fn count_arg(operation: &str, args: &[Value], index: usize, default: usize) -> Result<usize> {
    match arg(args, index) {
        None => Ok(default),
        Some(value) => value.as_usize().ok_or_else(|| {
            WriterError::invalid_argument(
                operation,
                format!("argument {} must be a non-negative integer, got '{}'", index + 1, value),
            )
        }),
    }
}

fn flag_arg(operation: &str, args: &[Value], index: usize, default: bool) -> Result<bool> {
    match arg(args, index) {
        None => Ok(default),
        Some(value) => value.as_bool().ok_or_else(|| {
            WriterError::invalid_argument(
                operation,
                format!("argument {} must be true or false, got '{}'", index + 1, value),
            )
        }),
    }
}
