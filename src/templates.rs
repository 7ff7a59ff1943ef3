//! Named line and block templates.
//!
//! Registration is append-or-overwrite; nothing is ever removed. Rendering a
//! template only interpolates its patterns; emitting the result is the
//! writer's job.

use crate::interpolate::interpolate;
use crate::value::Args;
use std::collections::HashMap;

/// Indentation used by blocks when none is given.
pub const DEFAULT_BLOCK_INDENT: usize = 2;

/// A paired-delimiter template: begin line, indented body, end line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTemplate {
    pub begin: String,
    pub end: String,
    pub indent: usize,
}

impl BlockTemplate {
    pub fn new(begin: impl Into<String>, end: impl Into<String>, indent: usize) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            indent,
        }
    }

    /// Interpolate both delimiters against `args`.
    pub fn render(&self, args: &Args) -> (String, String) {
        (interpolate(&self.begin, args), interpolate(&self.end, args))
    }
}

/// Storage for both template kinds.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    lines: HashMap<String, String>,
    blocks: HashMap<String, BlockTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line template, returning the pattern it replaced, if any.
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let pattern = pattern.into();
        tracing::debug!(template = %name, pattern = %pattern, "registered line template");
        self.lines.insert(name, pattern)
    }

    /// Register a block template, returning the template it replaced, if any.
    pub fn add_block(
        &mut self,
        name: impl Into<String>,
        block: BlockTemplate,
    ) -> Option<BlockTemplate> {
        let name = name.into();
        tracing::debug!(
            template = %name,
            begin = %block.begin,
            end = %block.end,
            indent = block.indent,
            "registered block template"
        );
        self.blocks.insert(name, block)
    }

    pub fn line(&self, name: &str) -> Option<&str> {
        self.lines.get(name).map(String::as_str)
    }

    pub fn block(&self, name: &str) -> Option<&BlockTemplate> {
        self.blocks.get(name)
    }

    pub fn lines(&self) -> &HashMap<String, String> {
        &self.lines
    }

    pub fn blocks(&self) -> &HashMap<String, BlockTemplate> {
        &self.blocks
    }
}
