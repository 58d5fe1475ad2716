//! Theme palette for rendered output.
//!
//! Maps resolved colors to CSS values. Named colors use CSS custom
//! properties with literal fallbacks so the host document's theme can
//! override them; true colors become `rgb(r,g,b)`.

use serde::{Deserialize, Serialize};

use crate::ansi::{Color, Paint};

/// CSS values used when painting runs.
///
/// All fields are optional in TOML so users only override what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Text color used when inverse video needs an explicit foreground
    #[serde(default = "default_foreground")]
    pub default_foreground: String,
    /// Background color used when inverse video needs an explicit background
    #[serde(default = "default_background")]
    pub default_background: String,
    /// Opacity applied to dim (faint) text
    #[serde(default = "default_dim_opacity")]
    pub dim_opacity: f64,
    /// Colors for SGR 30-37 / 40-47, in ANSI order
    #[serde(default = "default_normal")]
    pub normal: [String; 8],
    /// Colors for SGR 90-97 / 100-107, in ANSI order
    #[serde(default = "default_bright")]
    pub bright: [String; 8],
}

pub fn default_foreground() -> String {
    "var(--text-normal)".to_string()
}

pub fn default_background() -> String {
    "var(--background-primary)".to_string()
}

pub fn default_dim_opacity() -> f64 {
    0.6
}

pub fn default_normal() -> [String; 8] {
    [
        "var(--color-black, black)",
        "var(--color-red, #d04255)",
        "var(--color-green, #08979c)",
        "var(--color-yellow, #d4b106)",
        "var(--color-blue, #1890ff)",
        "var(--color-purple, #6900a1)",
        "var(--color-cyan, #08979c)",
        "var(--color-white, white)",
    ]
    .map(String::from)
}

pub fn default_bright() -> [String; 8] {
    [
        "gray", "#ff7875", "#5cdbd3", "#ffec3d", "#69c0ff", "#b37feb", "#5cdbd3", "white",
    ]
    .map(String::from)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default_foreground: default_foreground(),
            default_background: default_background(),
            dim_opacity: default_dim_opacity(),
            normal: default_normal(),
            bright: default_bright(),
        }
    }
}

impl Palette {
    /// CSS value for a resolved color.
    pub fn color_css(&self, color: &Color) -> String {
        match *color {
            Color::Named { hue, bright: false } => self.normal[hue.index()].clone(),
            Color::Named { hue, bright: true } => self.bright[hue.index()].clone(),
            Color::Rgb { r, g, b } => format!("rgb({},{},{})", r, g, b),
        }
    }

    /// CSS value for a display paint, including renderer defaults.
    pub fn paint_css(&self, paint: &Paint) -> String {
        match paint {
            Paint::Color(color) => self.color_css(color),
            Paint::DefaultForeground => self.default_foreground.clone(),
            Paint::DefaultBackground => self.default_background.clone(),
        }
    }
}
