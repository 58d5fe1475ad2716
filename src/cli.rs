//! CLI definitions for termblock
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::output::OutputFormat;

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termblock")]
#[command(about = "Render ANSI-colored terminal output as styled HTML, JSON or plain text")]
#[command(
    long_about = "termblock - Convert text with ANSI/SGR escape sequences into styled runs.

Terminal output pasted into documents keeps its colors and attributes:
bold, dim, italic, underline, inverse, strikethrough, 16 named colors,
the 256-color palette and 24-bit true color.

QUICK START:
    ls --color=always | termblock render          HTML from stdin
    termblock render build.log --format json      Structured runs
    termblock render snippet.txt --fragment       Spans without <pre><code>

Escape shorthands such as \\e[31m or \\x1b[0m are expanded by default."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/termblock/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render ANSI text into styled output
    #[command(long_about = "Render text containing ANSI escape sequences.

Reads FILE (or stdin when FILE is omitted or '-') and writes the styled
result to stdout. Only SGR sequences (ESC[...m) affect styling; cursor
movement and other control sequences are dropped.

EXAMPLES:
    termblock render log.txt                   HTML wrapped in <pre><code>
    termblock render log.txt --fragment        HTML spans only
    termblock render log.txt --format json     One JSON object per run
    termblock render log.txt --format text     Strip all escape sequences
    printf '\\e[1mhi' | termblock render        Shorthands are expanded")]
    Render {
        /// Input file ('-' or omitted for stdin)
        #[arg(help = "Input file ('-' or omitted for stdin)")]
        file: Option<PathBuf>,
        /// Output format (overrides config)
        #[arg(long, short, value_enum, help = "Output format (overrides config)")]
        format: Option<OutputFormat>,
        /// Emit HTML spans without the <pre><code> wrapper
        #[arg(long, help = "Emit HTML spans without the <pre><code> wrapper")]
        fragment: bool,
        /// Do not expand \e, \n, \t, \xHH and \uHHHH shorthands
        #[arg(long, help = "Do not expand backslash escape shorthands")]
        no_shorthands: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and initialize the termblock configuration file.

Configuration is stored in ~/.config/termblock/config.toml and holds
the color palette, input preprocessing and output defaults.

EXAMPLES:
    termblock config show          Display the effective configuration
    termblock config path          Print the config file location
    termblock config init          Write the default configuration"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration if no file exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
