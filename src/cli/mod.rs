//! CLI argument parsing for fancy-writer.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use fancy_writer::ProgramFormat;
use std::path::PathBuf;

/// fancy-writer: render indented, prefixed text from declarative programs.
///
/// A program is a YAML or JSON file listing write operations (write,
/// indent, comment, block, ...) and template registrations. Rendering runs
/// it and prints the resulting text.
#[derive(Parser, Debug)]
#[command(name = "fancy-writer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for fancy-writer.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a program file and write its output.
    Render(RenderArgs),

    /// Interpolate one template pattern and print the result.
    ///
    /// `%name` placeholders take values from `--arg name=value`; `%%` is a
    /// literal percent sign. Missing arguments render as empty text.
    Interpolate(InterpolateArgs),
}

/// Program file formats accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for ProgramFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => ProgramFormat::Yaml,
            FormatArg::Json => ProgramFormat::Json,
        }
    }
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the program file.
    pub program: PathBuf,

    /// Program format. Defaults to JSON for `.json` files, YAML otherwise.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the separator between collection items.
    #[arg(long)]
    pub enum_separator: Option<String>,

    /// Override the quote around collection items.
    #[arg(long)]
    pub enum_quote: Option<String>,
}

/// Arguments for the `interpolate` command.
#[derive(Parser, Debug)]
pub struct InterpolateArgs {
    /// Pattern containing `%name` placeholders.
    pub pattern: String,

    /// Placeholder value as `name=value` (repeatable).
    #[arg(short, long = "arg", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
