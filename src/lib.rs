//! termblock Library
//!
//! Converts text containing ANSI/SGR escape sequences into styled text runs
//! for non-terminal surfaces such as HTML documents.

pub mod ansi;
pub mod cli;
pub mod config;
pub mod output;
pub mod theme;

pub use ansi::{render, render_with, Run, Style, Tokenizer, VteTokenizer};
pub use config::Config;
pub use output::OutputFormat;
pub use theme::Palette;
