//! ANSI rendering data types.
//!
//! Contains the core data structures shared by the tokenizer, the SGR
//! state machine and the run emitter:
//! - Hue / Color: resolved colors (16 named colors, RGB)
//! - Style: cumulative text attributes (bold, italic, underline, etc.)
//! - Paint / Fills: display colors after the inverse-video swap
//! - Token: one unit of tokenized input
//! - Run: a span of text with a uniform style snapshot

use serde::Serialize;

/// One of the 8 base terminal hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Hue {
    /// All hues in ANSI index order (30-37 / 40-47).
    pub const ALL: [Hue; 8] = [
        Hue::Black,
        Hue::Red,
        Hue::Green,
        Hue::Yellow,
        Hue::Blue,
        Hue::Magenta,
        Hue::Cyan,
        Hue::White,
    ];

    /// Map an ANSI color index to its hue. Indices wrap modulo 8.
    pub fn from_index(index: u16) -> Self {
        Self::ALL[usize::from(index % 8)]
    }

    /// Position of this hue in ANSI index order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A resolved, renderer-ready color.
///
/// Indexed (8-bit) colors never survive as their own variant: the palette
/// index is resolved into either a named color or an RGB triple as soon as
/// the SGR parameters are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Color {
    /// One of the 16 conventional terminal colors
    Named { hue: Hue, bright: bool },
    /// 24-bit color. Channels are kept as given, without clamping.
    Rgb { r: u16, g: u16, b: u16 },
}

/// Cumulative display attributes at a point in the stream.
///
/// `None` colors mean "renderer default", which is distinct from any
/// explicit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
    pub strikethrough: bool,
}

impl Style {
    /// Restore every attribute to its default (SGR 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the style carries no attribute at all.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Resolve the colors to paint, applying inverse video.
    ///
    /// With `inverse` set, foreground and background swap places and a
    /// missing side is filled with the renderer default so the swap is
    /// always visible. The style itself is left untouched.
    pub fn fills(&self) -> Fills {
        if self.inverse {
            Fills {
                foreground: Some(
                    self.background
                        .map_or(Paint::DefaultForeground, Paint::Color),
                ),
                background: Some(
                    self.foreground
                        .map_or(Paint::DefaultBackground, Paint::Color),
                ),
            }
        } else {
            Fills {
                foreground: self.foreground.map(Paint::Color),
                background: self.background.map(Paint::Color),
            }
        }
    }
}

/// A color as it will be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Color(Color),
    /// The renderer's default text color
    DefaultForeground,
    /// The renderer's default background color
    DefaultBackground,
}

/// Display colors of a run. `None` leaves the side to the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Fills {
    pub foreground: Option<Paint>,
    pub background: Option<Paint>,
}

/// One unit of tokenized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal content to render
    Text(String),
    /// A CSI sequence: final byte plus its numeric parameters in order.
    /// `None` marks a parameter position that was not a number.
    ControlSequence {
        command: char,
        params: Vec<Option<u16>>,
    },
    /// Any other escape or control event (ESC, OSC, DCS, C0 controls)
    Other,
}

impl Token {
    /// Build a control sequence token from plain numeric parameters.
    pub fn csi(command: char, params: &[u16]) -> Self {
        Token::ControlSequence {
            command,
            params: params.iter().copied().map(Some).collect(),
        }
    }

    /// Build an SGR (`m`) token from plain numeric parameters.
    pub fn sgr(params: &[u16]) -> Self {
        Self::csi('m', params)
    }
}

/// A contiguous span of output sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub style: Style,
    /// Display colors, resolved from `style` when the run was emitted
    pub fills: Fills,
}

impl Run {
    /// Create a run, snapshotting the style and resolving its fills.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            fills: style.fills(),
        }
    }

    /// A run with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}
