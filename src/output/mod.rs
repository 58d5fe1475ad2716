//! Output writers for rendered runs.
//!
//! - html: inline-styled `<span>` markup (optionally inside `<pre><code>`)
//! - json: structured runs with resolved CSS colors
//! - text: plain text with all styling removed

pub mod html;
pub mod json;
pub mod text;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::ansi::Run;
use crate::theme::Palette;

pub use html::{escape, render_html, style_declarations, HtmlOptions};
pub use json::render_json;
pub use text::render_text;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
}

/// Serialize runs in the requested format.
pub fn format_runs(
    runs: &[Run],
    format: OutputFormat,
    palette: &Palette,
    html: &HtmlOptions,
) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(render_html(runs, palette, html)),
        OutputFormat::Json => render_json(runs, palette).context("Failed to serialize runs"),
        OutputFormat::Text => Ok(render_text(runs)),
    }
}
