//! Snapshot tests for HTML output.

use termblock::ansi::render;
use termblock::output::{render_html, HtmlOptions};
use termblock::Palette;

/// Render input as an HTML fragment with the default palette
fn html(input: &str) -> String {
    let options = HtmlOptions {
        wrap: false,
        ..HtmlOptions::default()
    };
    render_html(&render(input), &Palette::default(), &options)
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn html_plain_text() {
    insta::assert_snapshot!(html("plain text"), @"plain text");
}

#[test]
fn html_bold_italic() {
    insta::assert_snapshot!(
        html("\x1b[1;3mstrong\x1b[0m"),
        @r#"<span style="font-weight: bold; font-style: italic">strong</span>"#
    );
}

#[test]
fn html_dim_strikethrough() {
    insta::assert_snapshot!(
        html("\x1b[2;9mold"),
        @r#"<span style="text-decoration: line-through; opacity: 0.6">old</span>"#
    );
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn html_named_colors() {
    insta::assert_snapshot!(
        html("\x1b[32mok \x1b[91;44merr"),
        @r#"<span style="color: var(--color-green, #08979c)">ok </span><span style="color: #ff7875; background-color: var(--color-blue, #1890ff)">err</span>"#
    );
}

#[test]
fn html_indexed_and_truecolor() {
    insta::assert_snapshot!(
        html("\x1b[38;5;208mA\x1b[48;2;1;2;3mB"),
        @r#"<span style="color: rgb(255,102,0)">A</span><span style="color: rgb(255,102,0); background-color: rgb(1,2,3)">B</span>"#
    );
}

#[test]
fn html_inverse_defaults() {
    insta::assert_snapshot!(
        html("\x1b[7mrev"),
        @r#"<span style="color: var(--text-normal); background-color: var(--background-primary)">rev</span>"#
    );
}

// ============================================================================
// Escaping and wrapping
// ============================================================================

#[test]
fn html_escapes_markup_in_text() {
    insta::assert_snapshot!(
        html("\x1b[1m<b>\"x\" & 'y'</b>"),
        @r#"<span style="font-weight: bold">&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;</span>"#
    );
}

#[test]
fn html_wrapped_block() {
    let out = render_html(
        &render("\x1b[4mu\x1b[24m."),
        &Palette::default(),
        &HtmlOptions::default(),
    );
    insta::assert_snapshot!(
        out,
        @r#"<pre><code class="language-terminal is-loaded"><span style="text-decoration: underline">u</span>.</code></pre>"#
    );
}
