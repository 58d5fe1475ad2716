//! Color resolution for the three SGR color models.
//!
//! - 4-bit: 30-37 / 90-97 style named colors
//! - 8-bit: 256-color palette indices (`38;5;n`)
//! - 24-bit: true color (`38;2;r;g;b`)
//!
//! All functions are total: any input yields a color.

use super::types::{Color, Hue};

/// First index of the 6x6x6 color cube in the 256-color palette.
const CUBE_START: u16 = 16;
/// First index of the grayscale ramp in the 256-color palette.
const GRAY_START: u16 = 232;
/// Distance between adjacent cube levels (0, 51, ..., 255).
const CUBE_STEP: u16 = 51;

/// Resolve a 4-bit color: one of 8 hues, optionally bright.
pub fn resolve_named(index: u16, bright: bool) -> Color {
    Color::Named {
        hue: Hue::from_index(index),
        bright,
    }
}

/// Resolve an 8-bit palette index.
///
/// 0-15 map onto the named colors, 16-231 onto the color cube and
/// 232-255 onto the grayscale ramp. Indices past 255 continue the ramp.
pub fn resolve_indexed(n: u16) -> Color {
    if n < CUBE_START {
        return resolve_named(n % 8, n >= 8);
    }
    if n < GRAY_START {
        let i = n - CUBE_START;
        return resolve_true_color(
            (i / 36) * CUBE_STEP,
            ((i % 36) / 6) * CUBE_STEP,
            (i % 6) * CUBE_STEP,
        );
    }
    let gray = (n - GRAY_START).saturating_mul(10).saturating_add(8);
    resolve_true_color(gray, gray, gray)
}

/// Wrap an RGB triple. Channels are passed through unclamped.
pub fn resolve_true_color(r: u16, g: u16, b: u16) -> Color {
    Color::Rgb { r, g, b }
}
