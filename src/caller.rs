//! Caller-context interface.
//!
//! An embedding application can expose its own named operations to writer
//! programs by implementing [`Caller`]. Names the caller responds to shadow
//! registered templates of the same spelling; built-in operations always win.

use crate::error::Result;
use crate::value::Value;
use crate::writer::Writer;

/// A nested program body handed through dynamic dispatch.
pub type Body<'b, 'a> = Box<dyn FnOnce(&mut Writer<'a>) -> Result<()> + 'b>;

/// Operations an embedding application makes callable by name.
///
/// Methods take `&self` so a caller operation can yield to a body that
/// invokes further caller operations; use interior mutability for state.
pub trait Caller {
    /// Whether this caller implements `operation`.
    fn responds_to(&self, operation: &str) -> bool;

    /// Run `operation`. Only called when [`Caller::responds_to`] returned true.
    fn invoke(&self, invocation: Invocation<'_, '_>) -> Result<Value>;
}

/// Everything a caller operation receives: its name, the forwarded
/// arguments, and the optional nested body with the writer it runs on.
pub struct Invocation<'b, 'a> {
    operation: &'b str,
    args: &'b [Value],
    writer: &'b mut Writer<'a>,
    body: Option<Body<'b, 'a>>,
}

impl<'b, 'a> Invocation<'b, 'a> {
    pub(crate) fn new(
        operation: &'b str,
        args: &'b [Value],
        writer: &'b mut Writer<'a>,
        body: Option<Body<'b, 'a>>,
    ) -> Self {
        Self {
            operation,
            args,
            writer,
            body,
        }
    }

    pub fn operation(&self) -> &'b str {
        self.operation
    }

    pub fn args(&self) -> &'b [Value] {
        self.args
    }

    pub fn arg(&self, index: usize) -> Option<&'b Value> {
        self.args.get(index)
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// The writer the program is running on.
    pub fn writer(&mut self) -> &mut Writer<'a> {
        &mut *self.writer
    }

    /// Run the nested body, if any. A body runs at most once; later calls
    /// do nothing.
    pub fn yield_body(&mut self) -> Result<()> {
        match self.body.take() {
            Some(body) => body(&mut *self.writer),
            None => Ok(()),
        }
    }
}
