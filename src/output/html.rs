//! HTML markup output.
//!
//! Each run becomes a `<span>` with inline CSS; runs without any visual
//! attribute are emitted as bare text. Text and attribute values are
//! escaped so terminal content can never turn into markup.

use std::borrow::Cow;
use std::fmt::Write;

use crate::ansi::Run;
use crate::theme::Palette;

/// Default class of the wrapping `<code>` element.
pub const DEFAULT_CODE_CLASS: &str = "language-terminal is-loaded";

/// Options for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the spans in `<pre><code class="...">`
    pub wrap: bool,
    /// Class attribute of the `<code>` element
    pub code_class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            code_class: DEFAULT_CODE_CLASS.to_string(),
        }
    }
}

/// Escape `& < > " '` for use in text or attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// CSS declarations for a run, in a stable order.
pub fn style_declarations(run: &Run, palette: &Palette) -> Vec<String> {
    let style = &run.style;
    let mut decls = Vec::new();

    if style.bold {
        decls.push("font-weight: bold".to_string());
    }
    if style.italic {
        decls.push("font-style: italic".to_string());
    }
    match (style.underline, style.strikethrough) {
        (true, true) => decls.push("text-decoration: underline line-through".to_string()),
        (true, false) => decls.push("text-decoration: underline".to_string()),
        (false, true) => decls.push("text-decoration: line-through".to_string()),
        (false, false) => {}
    }
    if style.dim {
        decls.push(format!("opacity: {}", palette.dim_opacity));
    }
    if let Some(fg) = &run.fills.foreground {
        decls.push(format!("color: {}", palette.paint_css(fg)));
    }
    if let Some(bg) = &run.fills.background {
        decls.push(format!("background-color: {}", palette.paint_css(bg)));
    }

    decls
}

/// Append one run as markup.
fn push_run(out: &mut String, run: &Run, palette: &Palette) {
    let decls = style_declarations(run, palette);
    let text = escape(&run.text);
    if decls.is_empty() {
        out.push_str(&text);
    } else {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "<span style=\"{}\">{}</span>",
            escape(&decls.join("; ")),
            text
        );
    }
}

/// Render runs as HTML.
pub fn render_html(runs: &[Run], palette: &Palette, options: &HtmlOptions) -> String {
    let mut out = String::new();
    if options.wrap {
        let _ = write!(out, "<pre><code class=\"{}\">", escape(&options.code_class));
    }
    for run in runs {
        push_run(&mut out, run, palette);
    }
    if options.wrap {
        out.push_str("</code></pre>");
    }
    out
}
