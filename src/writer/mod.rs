//! The writer engine.
//!
//! A [`Writer`] turns a program (a closure receiving the writer) into
//! prefixed lines on a [`Sink`]. Every line gets the concatenation of the
//! current prefix stack in front of it; scoped operations such as
//! [`Writer::indent`] and [`Writer::comment`] push a prefix for the duration
//! of their body.
//!
//! # Example
//!
//! ```
//! use fancy_writer::Writer;
//!
//! let mut out = String::new();
//! Writer::new(&mut out)
//!     .convert(|w| {
//!         w.comment(|w| w.write("generated"))?;
//!         w.block("config {", "}", |w| w.write("debug = true"))
//!     })
//!     .unwrap();
//! assert_eq!(out, "# generated\nconfig {\n  debug = true\n}\n");
//! ```
//!
//! Names that are not Rust methods (registered templates, caller-context
//! operations) go through [`Writer::invoke`] and [`Writer::invoke_with`];
//! see the `dispatch` module for the resolution order.

mod builtins;
mod dispatch;
mod guard;


pub use builtins::BUILTIN_OPERATIONS;
pub use guard::PrefixGuard;

use crate::caller::Caller;
use crate::config::WriterOptions;
use crate::error::Result;
use crate::sink::Sink;
use crate::templates::{BlockTemplate, DEFAULT_BLOCK_INDENT, TemplateRegistry};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Marker and spacing used by [`Writer::comment`].
pub const DEFAULT_COMMENT_MARKER: &str = "#";

/// Formats declarative write operations into prefixed lines.
pub struct Writer<'a> {
    sink: Box<dyn Sink + 'a>,
    prefixes: Vec<String>,
    options: WriterOptions,
    caller: Option<Weak<dyn Caller + 'a>>,
    templates: TemplateRegistry,
}

impl fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("prefixes", &self.prefixes)
            .field("options", &self.options)
            .field("has_caller", &self.caller().is_some())
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl<'a> Writer<'a> {
    /// Create a writer with default options.
    pub fn new<S: Sink + 'a>(sink: S) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    pub fn with_options<S: Sink + 'a>(sink: S, options: WriterOptions) -> Self {
        Self {
            sink: Box::new(sink),
            prefixes: Vec::new(),
            options,
            caller: None,
            templates: TemplateRegistry::new(),
        }
    }

    /// Attach a caller-context.
    ///
    /// Only a weak reference is kept: the writer never extends the caller's
    /// lifetime, and a caller that has been dropped is treated as absent.
    pub fn with_caller<C: Caller + 'a>(mut self, caller: &Rc<C>) -> Self {
        let weak: Weak<C> = Rc::downgrade(caller);
        self.caller = Some(weak);
        self
    }

    /// Create a writer and immediately run `program` against it.
    pub fn run<S, F>(sink: S, options: WriterOptions, program: F) -> Result<Self>
    where
        S: Sink + 'a,
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut writer = Self::with_options(sink, options);
        writer.convert(program)?;
        Ok(writer)
    }

    /// Run a program against this writer.
    ///
    /// May be called any number of times; each call continues on the same
    /// sink, prefix stack, and template registry.
    pub fn convert<T, F>(&mut self, program: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        program(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn enum_separator(&self) -> &str {
        &self.options.enum_separator
    }

    pub fn enum_quote(&self) -> &str {
        &self.options.enum_quote
    }

    /// The live caller-context, if one was attached and is still alive.
    pub fn caller(&self) -> Option<Rc<dyn Caller + 'a>> {
        self.caller.as_ref().and_then(Weak::upgrade)
    }

    /// Number of prefixes currently on the stack.
    pub fn prefix_depth(&self) -> usize {
        self.prefixes.len()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The combined prefix written in front of every line right now.
    pub fn prefix(&self) -> String {
        self.prefixes.concat()
    }

    pub fn line_templates(&self) -> &HashMap<String, String> {
        self.templates.lines()
    }

    pub fn block_templates(&self) -> &HashMap<String, BlockTemplate> {
        self.templates.blocks()
    }

    // =========================================================================
    // Template registration
    // =========================================================================

    /// Register (or replace) a single-line template.
    pub fn add_line_config(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.templates.add_line(name, pattern);
    }

    /// Register (or replace) a block template. [`DEFAULT_BLOCK_INDENT`] is
    /// the conventional width.
    pub fn add_block_config(
        &mut self,
        name: impl Into<String>,
        begin: impl Into<String>,
        end: impl Into<String>,
        indent: usize,
    ) {
        self.templates
            .add_block(name, BlockTemplate::new(begin, end, indent));
    }

    // =========================================================================
    // Line rendering
    // =========================================================================

    /// Write one value as one line.
    ///
    /// Text is written verbatim, lists and maps are joined with the configured
    /// quote and separator, anything else uses its display form.
    pub fn write(&mut self, value: impl Into<Value>) -> Result<()> {
        self.write_line(&value.into())
    }

    /// Write each value on its own line. An empty input still writes one
    /// empty line.
    pub fn write_lines<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut wrote = false;
        for value in values {
            self.write_line(&value.into())?;
            wrote = true;
        }
        if !wrote {
            self.newline()?;
        }
        Ok(())
    }

    /// Write a line holding only the current prefix.
    pub fn newline(&mut self) -> Result<()> {
        self.write_line(&Value::Text(String::new()))
    }

    /// Write a collection as a single joined line.
    pub fn write_enum(&mut self, collection: impl Into<Value>) -> Result<()> {
        self.write_line(&collection.into())
    }

    /// Alias for [`Writer::write`].
    pub fn w(&mut self, value: impl Into<Value>) -> Result<()> {
        self.write(value)
    }

    /// Alias for [`Writer::write`].
    pub fn line(&mut self, value: impl Into<Value>) -> Result<()> {
        self.write(value)
    }

    /// Alias for [`Writer::write_enum`].
    pub fn e(&mut self, collection: impl Into<Value>) -> Result<()> {
        self.write_enum(collection)
    }

    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::Text(text) => text.clone(),
            Value::List(items) => self.join_enumerable(items.iter().map(Value::to_string)),
            // Each entry is one element, in key order.
            Value::Map(map) => {
                self.join_enumerable(map.iter().map(|(key, item)| format!("{key}: {item}")))
            }
            other => other.to_string(),
        }
    }

    fn join_enumerable(&self, items: impl Iterator<Item = String>) -> String {
        let quote = &self.options.enum_quote;
        items
            .map(|item| format!("{quote}{item}{quote}"))
            .collect::<Vec<_>>()
            .join(self.options.enum_separator.as_str())
    }

    fn write_line(&mut self, value: &Value) -> Result<()> {
        let mut line = self.prefix();
        line.push_str(&self.format_value(value));
        line.push('\n');
        tracing::trace!(line = %line.trim_end_matches('\n'), "write line");
        self.sink.append(&line)
    }

    // =========================================================================
    // Scoped prefixes
    // =========================================================================

    /// Push `prefix` until the returned guard is dropped.
    pub fn push_prefix(&mut self, prefix: impl Into<String>) -> PrefixGuard<'_, 'a> {
        PrefixGuard::push(self, prefix.into())
    }

    /// Run `body` with `prefix` added to every line it writes.
    pub fn prepend<T, F>(&mut self, prefix: impl Into<String>, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let mut guard = self.push_prefix(prefix);
        body(&mut *guard)
    }

    /// Comment out every line of `body` with `"# "`.
    pub fn comment<T, F>(&mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.comment_with(DEFAULT_COMMENT_MARKER, true, body)
    }

    /// Comment out every line of `body` with `marker`, followed by a space
    /// when `with_space` is set.
    pub fn comment_with<T, F>(&mut self, marker: &str, with_space: bool, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let prefix = if with_space {
            format!("{marker} ")
        } else {
            marker.to_string()
        };
        self.prepend(prefix, body)
    }

    /// Alias for [`Writer::comment`].
    pub fn c<T, F>(&mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.comment(body)
    }

    /// Indent every line of `body` by `width` spaces.
    pub fn indent<T, F>(&mut self, width: usize, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.prepend(" ".repeat(width), body)
    }

    /// Alias for [`Writer::indent`].
    pub fn i<T, F>(&mut self, width: usize, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.indent(width, body)
    }

    /// Indent every line of `body` by `count` tabs.
    pub fn tab_indent<T, F>(&mut self, count: usize, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.prepend("\t".repeat(count), body)
    }

    /// Alias for [`Writer::tab_indent`].
    pub fn t<T, F>(&mut self, count: usize, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.tab_indent(count, body)
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Write `begin`, then `body` indented by [`DEFAULT_BLOCK_INDENT`], then `end`.
    pub fn block<T, F>(&mut self, begin: &str, end: &str, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.block_indented(begin, end, DEFAULT_BLOCK_INDENT, body)
    }

    /// Like [`Writer::block`] with an explicit indentation width.
    ///
    /// If `body` fails the end line is not written.
    pub fn block_indented<T, F>(
        &mut self,
        begin: &str,
        end: &str,
        indent: usize,
        body: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.write(begin)?;
        let result = self.indent(indent, body)?;
        self.write(end)?;
        Ok(result)
    }
}
