//! Writer programs as data.
//!
//! A [`Program`] is a list of steps, each naming an operation, its
//! positional arguments, and an optional nested body. Every step goes
//! through [`Writer::invoke`], so built-ins, caller-context operations, and
//! templates are all reachable. Templates are registered by ordinary
//! `add_line_config` / `add_block_config` steps.
//!
//! ```yaml
//! enum_separator: ";"
//! steps:
//!   - op: add_line_config
//!     args: [load_module, "LoadModule %module modules/%file.so"]
//!   - op: comment
//!     body:
//!       - op: write
//!         args: ["generated"]
//!   - op: load_module
//!     args: [{module: mime_module, file: mod_mime}]
//! ```

use crate::config::WriterOptions;
use crate::error::{Result, WriterError};
use crate::value::Value;
use crate::writer::Writer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a program file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramFormat {
    #[default]
    Yaml,
    Json,
}

impl ProgramFormat {
    /// Guess the format from a file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// One operation invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Operation name, resolved like [`Writer::invoke`].
    pub op: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,

    /// Nested steps, run inside the operation's scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Step>>,
}

impl Step {
    pub fn new(op: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            op: op.into(),
            args,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Vec<Step>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Writer options plus the steps to run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    #[serde(flatten)]
    pub options: WriterOptions,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Program {
    /// Load a program file, picking the format from its extension unless
    /// one is given.
    pub fn load<P: AsRef<Path>>(path: P, format: Option<ProgramFormat>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WriterError::Program(format!(
                "failed to read program file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content, format.unwrap_or_else(|| ProgramFormat::from_path(path)))
    }

    pub fn parse(content: &str, format: ProgramFormat) -> Result<Self> {
        match format {
            ProgramFormat::Yaml => Self::from_yaml(content),
            ProgramFormat::Json => Self::from_json(content),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let program: Program = serde_yaml::from_str(yaml)
            .map_err(|e| WriterError::Program(format!("failed to parse program YAML: {}", e)))?;
        program.options.validate()?;
        Ok(program)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let program: Program = serde_json::from_str(json)
            .map_err(|e| WriterError::Program(format!("failed to parse program JSON: {}", e)))?;
        program.options.validate()?;
        Ok(program)
    }

    /// Run every step against `writer`, stopping at the first error.
    pub fn run(&self, writer: &mut Writer<'_>) -> Result<()> {
        tracing::debug!(steps = self.steps.len(), "running program");
        run_steps(writer, &self.steps)
    }

    /// Run on a fresh writer configured with this program's options and
    /// return the output.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        Writer::run(&mut out, self.options.clone(), |w| self.run(w))?;
        Ok(out)
    }
}

fn run_steps(writer: &mut Writer<'_>, steps: &[Step]) -> Result<()> {
    for step in steps {
        match &step.body {
            Some(body) => writer.invoke_with(&step.op, &step.args, |w| run_steps(w, body))?,
            None => writer.invoke(&step.op, &step.args)?,
        };
    }
    Ok(())
}
