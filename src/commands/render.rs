//! Render command handler.
//!
//! Reads ANSI text from a file or stdin, renders it into runs and writes the
//! requested output format to stdout.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use termblock::ansi::{normalize_shorthands, render};
use termblock::output::{format_runs, OutputFormat};
use termblock::Config;

/// Per-invocation overrides from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderArgs {
    pub format: Option<OutputFormat>,
    pub fragment: bool,
    pub no_shorthands: bool,
}

/// Read the whole input, from stdin when `file` is `None` or `-`.
///
/// Invalid UTF-8 is replaced rather than rejected; terminal captures are
/// not always clean.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) if path != Path::new("-") => fs::read(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render `input` according to config and command-line overrides.
pub fn render_input(input: &str, config: &Config, args: RenderArgs) -> Result<String> {
    let text: Cow<'_, str> = if config.input.normalize_shorthands && !args.no_shorthands {
        normalize_shorthands(input)
    } else {
        Cow::Borrowed(input)
    };

    let runs = render(&text);
    let format = args.format.unwrap_or(config.output.format);
    let mut html = config.output.html_options();
    if args.fragment {
        html.wrap = false;
    }
    debug!(runs = runs.len(), format = ?format, "Writing output");

    format_runs(&runs, format, &config.theme, &html)
}

/// Handle the render command.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, args: RenderArgs, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let output = render_input(&input, config, args)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    // Plain text is written byte-for-byte; markup gets a trailing newline
    let format = args.format.unwrap_or(config.output.format);
    if format != OutputFormat::Text && !output.ends_with('\n') {
        stdout.write_all(b"\n").context("Failed to write output")?;
    }
    Ok(())
}
