//! fancy-writer: an embeddable engine for indented, prefixed, line-oriented
//! text output.
//!
//! Programs are closures that receive a [`Writer`]. The writer tracks a
//! stack of prefixes (indentation, comment markers) and applies it to every
//! line, so generated code and config files never need manual bookkeeping:
//!
//! ```
//! use fancy_writer::{Writer, args};
//!
//! let mut out = String::new();
//! let mut writer = Writer::new(&mut out);
//! writer.add_line_config("load_module", "LoadModule %module modules/%file.so");
//! writer
//!     .convert(|w| {
//!         w.comment(|w| w.write("modules"))?;
//!         w.invoke(
//!             "load_module",
//!             &[args([("module", "mime_module"), ("file", "mod_mime")]).into()],
//!         )?;
//!         Ok(())
//!     })
//!     .unwrap();
//! drop(writer);
//! assert_eq!(out, "# modules\nLoadModule mime_module modules/mod_mime.so\n");
//! ```
//!
//! # Modules
//!
//! - [`writer`]: the engine (prefix stack, line rendering, blocks, dispatch)
//! - [`templates`] and [`mod@interpolate`]: named `%placeholder` templates
//! - [`caller`]: the interface for exposing application operations by name
//! - [`program`]: programs as YAML/JSON data
//! - [`config`]: per-writer options

pub mod caller;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod interpolate;
pub mod program;
pub mod sink;
pub mod templates;
pub mod value;
pub mod writer;

#[cfg(test)]
mod test_support;

pub use caller::{Body, Caller, Invocation};
pub use config::WriterOptions;
pub use error::{Result, WriterError};
pub use interpolate::interpolate;
pub use program::{Program, ProgramFormat, Step};
pub use sink::{IoSink, Sink};
pub use templates::{BlockTemplate, DEFAULT_BLOCK_INDENT, TemplateRegistry};
pub use value::{Args, Value, args};
pub use writer::{BUILTIN_OPERATIONS, PrefixGuard, Writer};
