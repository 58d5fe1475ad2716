//! ANSI to styled runs.
//!
//! Converts text containing SGR escape sequences into an ordered list of
//! `Run`s, each pairing literal text with the style in effect for it.
//!
//! The pipeline is: shorthand normalization (optional, see
//! [`normalize_shorthands`]) → tokenization ([`Tokenizer`]) → the run
//! emitter, which folds tokens into runs while tracking the running style.
//!
//! Every call starts from a reset style and keeps no state afterwards.

mod color;
mod emitter;
mod handlers;
mod normalize;
mod tokenizer;
mod types;


pub use color::{resolve_indexed, resolve_named, resolve_true_color};
pub use emitter::Emitter;
pub use handlers::style::{apply_sgr, parse_extended_color};
pub use normalize::normalize_shorthands;
pub use tokenizer::{Tokenizer, VteTokenizer};
pub use types::{Color, Fills, Hue, Paint, Run, Style, Token};

use tracing::debug;

/// Render `input` into styled runs using the `vte` tokenizer.
pub fn render(input: &str) -> Vec<Run> {
    render_with(&VteTokenizer, input)
}

/// Render `input` into styled runs with a custom tokenizer.
///
/// If the tokenizer cannot produce tokens the raw input comes back as a
/// single unstyled run.
pub fn render_with<T: Tokenizer + ?Sized>(tokenizer: &T, input: &str) -> Vec<Run> {
    match tokenizer.tokenize(input) {
        Some(tokens) => render_tokens(tokens),
        None => {
            debug!(len = input.len(), "Tokenizer gave no tokens, rendering raw input");
            if input.is_empty() {
                Vec::new()
            } else {
                vec![Run::plain(input)]
            }
        }
    }
}

/// Fold a token sequence into runs.
pub fn render_tokens<I>(tokens: I) -> Vec<Run>
where
    I: IntoIterator<Item = Token>,
{
    let runs = tokens
        .into_iter()
        .fold(Emitter::new(), |mut emitter, token| {
            emitter.consume(token);
            emitter
        })
        .finish();
    debug!(runs = runs.len(), "Rendered token stream");
    runs
}
