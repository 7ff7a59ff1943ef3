//! Implementation of the `fancy-writer interpolate` command.

use crate::cli::InterpolateArgs;
use fancy_writer::{Args, Result, Value, interpolate};
use std::io::{self, Write};

/// Execute the `fancy-writer interpolate` command.
pub fn cmd_interpolate(args: InterpolateArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", interpolate_args(&args))?;
    Ok(())
}

fn interpolate_args(args: &InterpolateArgs) -> String {
    let values: Args = args
        .args
        .iter()
        .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
        .collect();
    interpolate(&args.pattern, &values)
}
