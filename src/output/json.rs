//! Structured JSON output.
//!
//! Runs are serialized as-is, plus the CSS each fill resolves to under the
//! active palette, so consumers need no palette knowledge of their own.

use serde::Serialize;

use crate::ansi::{Run, Style};
use crate::theme::Palette;

/// A run as written to JSON.
#[derive(Debug, Serialize)]
pub struct JsonRun<'a> {
    pub text: &'a str,
    pub style: &'a Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl<'a> JsonRun<'a> {
    pub fn new(run: &'a Run, palette: &Palette) -> Self {
        Self {
            text: &run.text,
            style: &run.style,
            color: run.fills.foreground.map(|p| palette.paint_css(&p)),
            background_color: run.fills.background.map(|p| palette.paint_css(&p)),
        }
    }
}

/// Render runs as a pretty-printed JSON array.
pub fn render_json(runs: &[Run], palette: &Palette) -> serde_json::Result<String> {
    let runs: Vec<JsonRun<'_>> = runs.iter().map(|run| JsonRun::new(run, palette)).collect();
    serde_json::to_string_pretty(&runs)
}
