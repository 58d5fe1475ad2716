//! End-to-end rendering properties through the public API.

use termblock::ansi::{
    normalize_shorthands, render, render_tokens, render_with, resolve_indexed, resolve_named,
    resolve_true_color, Paint, Run, Style, Token,
};

#[test]
fn text_without_escapes_is_one_default_run() {
    for input in ["a", "hello world", "multi\nline\ttext", "ünïcödé ✓"] {
        assert_eq!(render(input), vec![Run::plain(input)], "input: {:?}", input);
    }
}

#[test]
fn reset_is_idempotent_from_any_state() {
    let prefixes = [
        "",
        "\x1b[1;2;3;4;7;9m",
        "\x1b[38;5;200;48;2;1;2;3m",
        "\x1b[97;100m\x1b[22m",
    ];
    for prefix in prefixes {
        let runs = render(&format!("{}\x1b[0mx", prefix));
        assert_eq!(runs.last().unwrap().style, Style::default());
    }
}

#[test]
fn indexed_then_bold() {
    let runs = render("\x1b[38;5;196;1mx");
    assert_eq!(runs[0].style.foreground, Some(resolve_indexed(196)));
    assert!(runs[0].style.bold);
}

#[test]
fn truecolor_then_underline() {
    let runs = render("\x1b[38;2;10;20;30;4mx");
    assert_eq!(runs[0].style.foreground, Some(resolve_true_color(10, 20, 30)));
    assert!(runs[0].style.underline);
}

#[test]
fn colon_separated_truecolor_with_colorspace() {
    let runs = render("\x1b[38:2::10:20:30mx");
    assert_eq!(runs[0].style.foreground, Some(resolve_true_color(10, 20, 30)));
}

#[test]
fn inverse_swap_does_not_touch_style() {
    let runs = render("\x1b[31;7mx");
    let red = resolve_named(1, false);
    assert_eq!(runs[0].fills.background, Some(Paint::Color(red)));
    assert_eq!(runs[0].fills.foreground, Some(Paint::DefaultForeground));
    assert_eq!(runs[0].style.foreground, Some(red));
    assert_eq!(runs[0].style.background, None);
}

#[test]
fn unknown_code_does_not_abort_list() {
    let runs = render("\x1b[63;3mx");
    assert!(runs[0].style.italic);
    let baseline = render("\x1b[3mx");
    assert_eq!(runs, baseline);
}

#[test]
fn shorthand_pipeline() {
    let input = normalize_shorthands(r"\e[32mok\e[0m\tdone\n");
    let runs = render(&input);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "ok");
    assert_eq!(runs[0].style.foreground, Some(resolve_named(2, false)));
    assert_eq!(runs[1], Run::plain("\tdone\n"));
}

#[test]
fn failed_tokenizer_returns_raw_input() {
    let failing = |_: &str| -> Option<Vec<Token>> { None };
    let raw = "\x1b[1mbold?";
    assert_eq!(render_with(&failing, raw), vec![Run::plain(raw)]);
}

#[test]
fn custom_tokenizer_is_used() {
    let tokenizer = |input: &str| -> Option<Vec<Token>> {
        Some(vec![Token::sgr(&[1]), Token::Text(input.to_uppercase())])
    };
    let runs = render_with(&tokenizer, "shout");
    assert_eq!(runs[0].text, "SHOUT");
    assert!(runs[0].style.bold);
}

#[test]
fn render_is_linear_on_large_input() {
    let chunk = "\x1b[1;38;5;33mword\x1b[0m ";
    let input = chunk.repeat(20_000);
    let runs = render(&input);
    assert_eq!(runs.len(), 40_000);
}

#[test]
fn token_order_is_preserved() {
    let runs = render_tokens(vec![
        Token::Text("1".into()),
        Token::sgr(&[31]),
        Token::Text("2".into()),
        Token::Other,
        Token::Text("3".into()),
    ]);
    let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["1", "2", "3"]);
}
