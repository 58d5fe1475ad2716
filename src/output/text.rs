//! Plain text output: all styling stripped.

use crate::ansi::Run;

/// Concatenate the text of every run.
pub fn render_text(runs: &[Run]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
