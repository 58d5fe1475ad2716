//! Escape sequence tokenizer.
//!
//! Contains the `Tokenizer` trait consumed by the renderer and
//! `VteTokenizer`, which drives a `vte::Parser` and collects its callbacks
//! into a flat token list.

use vte::{Params, Parser, Perform};

use super::types::Token;

/// Splits raw text into text and control tokens.
///
/// Returning `None` signals that the input could not be tokenized; the
/// renderer then falls back to the raw input as a single unstyled run.
pub trait Tokenizer {
    fn tokenize(&self, input: &str) -> Option<Vec<Token>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Option<Vec<Token>>,
{
    fn tokenize(&self, input: &str) -> Option<Vec<Token>> {
        self(input)
    }
}

/// Tokenizer backed by the `vte` state machine.
///
/// A fresh parser is used for every call, so no state leaks between inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct VteTokenizer;

impl Tokenizer for VteTokenizer {
    fn tokenize(&self, input: &str) -> Option<Vec<Token>> {
        let mut parser: Parser = Parser::new();
        let mut collector = TokenCollector::default();
        parser.advance(&mut collector, input.as_bytes());
        Some(collector.finish())
    }
}

/// Performer that turns VTE callbacks into tokens.
#[derive(Debug, Default)]
struct TokenCollector {
    tokens: Vec<Token>,
    /// Printable characters not yet flushed into a text token
    text: String,
}

impl TokenCollector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_text();
        self.tokens
    }
}

impl Perform for TokenCollector {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            // Layout controls are content for a document surface
            b'\n' | b'\r' | b'\t' => self.text.push(char::from(byte)),
            _ => self.push(Token::Other),
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.push(Token::Other);
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.push(Token::Other);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        // Private markers (?, <, >, =) and overflowing parameter lists are
        // never SGR for our purposes
        if ignore || !intermediates.is_empty() {
            self.push(Token::Other);
            return;
        }

        // Colon sub-parameters are flattened inline, so `38:2::1:2:3` reads
        // the same as `38;2;0;1;2;3`
        let params = params
            .iter()
            .flat_map(|group| group.iter().copied().map(Some))
            .collect();

        self.push(Token::ControlSequence {
            command: action,
            params,
        });
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.push(Token::Other);
    }
}
