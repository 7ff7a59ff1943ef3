//! Name-based dispatch.
//!
//! [`Writer::invoke`] resolves a name in strict priority order and stops at
//! the first match:
//!
//! 1. the built-in table ([`super::BUILTIN_OPERATIONS`]);
//! 2. the caller-context, if attached, alive, and responding to the name;
//! 3. a registered line template;
//! 4. a registered block template;
//!
//! and otherwise fails with [`WriterError::UnresolvedOperation`].

use super::Writer;
use super::builtins::{Builtin, run_body};
use crate::caller::{Body, Invocation};
use crate::error::{Result, WriterError};
use crate::interpolate::interpolate;
use crate::value::{Args, Value};

static NO_ARGS: Args = Args::new();

impl<'a> Writer<'a> {
    /// Invoke an operation by name without a nested body.
    pub fn invoke(&mut self, operation: &str, args: &[Value]) -> Result<Value> {
        self.dispatch(operation, args, None)
    }

    /// Invoke an operation by name with a nested body.
    ///
    /// For block templates the body is written inside the block; for a
    /// caller-context operation it is forwarded untouched.
    pub fn invoke_with<F>(&mut self, operation: &str, args: &[Value], body: F) -> Result<Value>
    where
        F: FnOnce(&mut Writer<'a>) -> Result<()>,
    {
        self.dispatch(operation, args, Some(Box::new(body)))
    }

    /// Whether [`Writer::invoke`] would resolve `operation`.
    pub fn responds_to(&self, operation: &str) -> bool {
        Builtin::lookup(operation).is_some()
            || self
                .caller()
                .is_some_and(|caller| caller.responds_to(operation))
            || self.templates.line(operation).is_some()
            || self.templates.block(operation).is_some()
    }

    fn dispatch(
        &mut self,
        operation: &str,
        args: &[Value],
        body: Option<Body<'_, 'a>>,
    ) -> Result<Value> {
        if let Some(builtin) = Builtin::lookup(operation) {
            tracing::debug!(operation, "resolved built-in");
            return self.call_builtin(builtin, operation, args, body);
        }

        if let Some(caller) = self.caller()
            && caller.responds_to(operation)
        {
            tracing::debug!(operation, "resolved caller-context operation");
            return caller.invoke(Invocation::new(operation, args, self, body));
        }

        if let Some(pattern) = self.templates.line(operation) {
            tracing::debug!(operation, "resolved line template");
            let line = interpolate(pattern, template_args(operation, args)?);
            self.write(line)?;
            return Ok(Value::Null);
        }

        if let Some(block) = self.templates.block(operation).cloned() {
            tracing::debug!(operation, indent = block.indent, "resolved block template");
            let (begin, end) = block.render(template_args(operation, args)?);
            self.block_indented(&begin, &end, block.indent, |w| run_body(w, body))?;
            return Ok(Value::Null);
        }

        tracing::debug!(operation, "unresolved operation");
        Err(WriterError::UnresolvedOperation {
            name: operation.to_string(),
        })
    }
}

/// Templates take their argument mapping as the first argument. A missing
/// mapping behaves like an empty one.
fn template_args<'v>(operation: &str, args: &'v [Value]) -> Result<&'v Args> {
    match args.first() {
        None | Some(Value::Null) => Ok(&NO_ARGS),
        Some(Value::Map(map)) => Ok(map),
        Some(other) => Err(WriterError::invalid_argument(
            operation,
            format!("expected an argument mapping, got '{}'", other),
        )),
    }
}
