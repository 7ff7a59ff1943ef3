use crate::caller::{Caller, Invocation};
use crate::error::{Result, WriterError};
use crate::value::Value;
use crate::writer::Writer;
use std::cell::RefCell;

/// Run `program` on a fresh writer and return everything it wrote.
pub(crate) fn render<F>(program: F) -> String
where
    F: FnOnce(&mut Writer<'_>) -> Result<()>,
{
    let mut out = String::new();
    Writer::new(&mut out).convert(program).unwrap();
    out
}

/// Caller-context used across tests. Records every operation it runs.
#[derive(Debug, Default)]
pub(crate) struct RecordingCaller {
    pub(crate) calls: RefCell<Vec<String>>,
}

impl RecordingCaller {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Caller for RecordingCaller {
    fn responds_to(&self, operation: &str) -> bool {
        matches!(operation, "shout" | "heading" | "wrap" | "explode")
    }

    fn invoke(&self, mut invocation: Invocation<'_, '_>) -> Result<Value> {
        let operation = invocation.operation();
        self.calls.borrow_mut().push(operation.to_string());
        match operation {
            "shout" => {
                let text = invocation.arg(0).map(ToString::to_string).unwrap_or_default();
                Ok(Value::from(text.to_uppercase()))
            }
            "heading" => {
                let title = invocation.arg(0).map(ToString::to_string).unwrap_or_default();
                invocation.writer().write(format!("== {} ==", title))?;
                Ok(Value::Null)
            }
            "wrap" => {
                invocation.writer().write("<<")?;
                invocation.yield_body()?;
                invocation.writer().write(">>")?;
                Ok(Value::Bool(true))
            }
            _ => Err(WriterError::Caller {
                operation: operation.to_string(),
                message: "boom".to_string(),
            }),
        }
    }
}
