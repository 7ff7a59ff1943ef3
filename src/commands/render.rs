//! Implementation of the `fancy-writer render` command.

use crate::cli::RenderArgs;
use fancy_writer::{IoSink, Program, Result, Writer};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Execute the `fancy-writer render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            render_program(&args, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_program(&args, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Load the program named by `args`, apply option overrides, and run it
/// against `out`.
fn render_program<W: Write>(args: &RenderArgs, out: &mut W) -> Result<()> {
    let mut program = Program::load(&args.program, args.format.map(Into::into))?;

    if let Some(separator) = &args.enum_separator {
        program.options.enum_separator = separator.clone();
    }
    if let Some(quote) = &args.enum_quote {
        program.options.enum_quote = quote.clone();
    }
    program.options.validate()?;

    tracing::debug!(
        program = %args.program.display(),
        steps = program.steps.len(),
        "rendering program"
    );

    let mut writer = Writer::with_options(IoSink::new(out), program.options.clone());
    program.run(&mut writer)
}
