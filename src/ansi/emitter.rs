//! Run emitter.
//!
//! Contains the `Emitter` accumulator that consumes tokens left to right,
//! dispatches SGR sequences to the style handler and pairs text with a
//! snapshot of the running style.

use super::handlers::{log_unhandled_csi, log_unhandled_other};
use super::types::{Run, Style, Token};

/// Fold accumulator for one render pass.
#[derive(Debug, Default)]
pub struct Emitter {
    /// Style applied to the next text token
    pub(crate) current_style: Style,
    /// Runs emitted so far, in input order
    runs: Vec<Run>,
}

impl Emitter {
    /// Create an emitter with a freshly reset style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style that the next text token would receive.
    pub fn current_style(&self) -> &Style {
        &self.current_style
    }

    /// Consume a single token.
    pub fn consume(&mut self, token: Token) {
        match token {
            Token::Text(text) => {
                if !text.is_empty() {
                    self.runs.push(Run::new(text, self.current_style));
                }
            }
            Token::ControlSequence { command: 'm', params } => self.handle_sgr(&params),
            Token::ControlSequence { command, params } => log_unhandled_csi(command, &params),
            Token::Other => log_unhandled_other(),
        }
    }

    /// Finish the pass and hand out the emitted runs.
    pub fn finish(self) -> Vec<Run> {
        self.runs
    }
}

impl Extend<Token> for Emitter {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.consume(token);
        }
    }
}
