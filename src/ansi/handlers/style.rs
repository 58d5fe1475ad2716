//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Attributes (bold, dim, italic, underline, inverse, strikethrough)
//! - Colors (foreground and background, normal and bright)
//! - 256-color and RGB color support
//!
//! Parameters are consumed left to right with an explicit cursor because
//! codes 38 and 48 swallow a variable number of following parameters.

use tracing::trace;

use super::super::color::{resolve_indexed, resolve_named, resolve_true_color};
use super::super::emitter::Emitter;
use super::super::types::{Color, Style};

impl Emitter {
    /// Handle SGR (Select Graphic Rendition) - CSI m.
    /// Parses parameters and updates the running style.
    pub fn handle_sgr(&mut self, params: &[Option<u16>]) {
        apply_sgr(params, &mut self.current_style);
    }
}

/// Apply one SGR parameter list to `style`.
///
/// Never fails: unknown codes and non-numeric positions are skipped, and an
/// empty list acts as a single `0` (full reset).
pub fn apply_sgr(params: &[Option<u16>], style: &mut Style) {
    if params.is_empty() {
        style.reset();
        return;
    }

    let mut i = 0;
    while i < params.len() {
        let Some(code) = params[i] else {
            i += 1;
            continue;
        };

        match code {
            0 => style.reset(),
            1 => style.bold = true,
            2 => style.dim = true,
            3 => style.italic = true,
            4 => style.underline = true,
            7 => style.inverse = true,
            9 => style.strikethrough = true,
            22 => {
                style.bold = false;
                style.dim = false;
            }
            23 => style.italic = false,
            24 => style.underline = false,
            27 => style.inverse = false,
            29 => style.strikethrough = false,
            // Standard foreground colors (30-37)
            30..=37 => style.foreground = Some(resolve_named(code - 30, false)),
            39 => style.foreground = None,
            // Standard background colors (40-47)
            40..=47 => style.background = Some(resolve_named(code - 40, false)),
            49 => style.background = None,
            // Bright foreground colors (90-97)
            90..=97 => style.foreground = Some(resolve_named(code - 90, true)),
            // Bright background colors (100-107)
            100..=107 => style.background = Some(resolve_named(code - 100, true)),
            38 | 48 => {
                let (color, consumed) = parse_extended_color(&params[i + 1..]);
                if let Some(color) = color {
                    if code == 38 {
                        style.foreground = Some(color);
                    } else {
                        style.background = Some(color);
                    }
                }
                i += consumed;
            }
            _ => trace!(code, "Ignoring unsupported SGR code"),
        }

        i += 1;
    }
}

/// Parse the sub-parameters following a 38 or 48 code.
///
/// `rest` starts right after the 38/48. Returns the resolved color, if any,
/// and how many entries of `rest` were consumed:
/// - `5;n` consumes 2 and resolves palette index `n`
/// - `2;r;g;b` consumes 4, `2;0;r;g;b` (with colorspace id) consumes 5
/// - anything else consumes nothing
///
/// A leading 0 is only taken as the colorspace id when four values follow
/// the `2`. So `2;0;0;0;1` reads as rgb(0,0,1), while `2;0;0;1` is
/// rgb(0,0,1) with the zero as the red channel.
pub fn parse_extended_color(rest: &[Option<u16>]) -> (Option<Color>, usize) {
    match rest.first().copied().flatten() {
        Some(5) => {
            let color = rest.get(1).copied().flatten().map(resolve_indexed);
            (color, 2)
        }
        Some(2) => {
            // ISO 8613-6 places a colorspace id before the channels. It is
            // only assumed when it reads 0 and a fourth value follows.
            let offset = usize::from(rest.get(1) == Some(&Some(0)) && rest.len() > 4);
            let channel = |n: usize| rest.get(1 + offset + n).copied().flatten().unwrap_or(0);
            let color = resolve_true_color(channel(0), channel(1), channel(2));
            (Some(color), 4 + offset)
        }
        _ => {
            trace!(mode = ?rest.first(), "Ignoring malformed extended color");
            (None, 0)
        }
    }
}
