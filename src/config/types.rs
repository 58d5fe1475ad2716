//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::output::html::DEFAULT_CODE_CLASS;
use crate::output::{HtmlOptions, OutputFormat};
use crate::theme::Palette;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Palette,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input preprocessing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Rewrite `\e`, `\n`, `\t`, `\xHH` and `\uHHHH` before tokenizing
    #[serde(default = "default_normalize_shorthands")]
    pub normalize_shorthands: bool,
}

pub fn default_normalize_shorthands() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            normalize_shorthands: default_normalize_shorthands(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
    /// Wrap HTML output in `<pre><code>`
    #[serde(default = "default_wrap")]
    pub wrap: bool,
    /// Class attribute for the wrapping `<code>` element
    #[serde(default = "default_code_class")]
    pub code_class: String,
}

pub fn default_wrap() -> bool {
    true
}

pub fn default_code_class() -> String {
    DEFAULT_CODE_CLASS.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            wrap: default_wrap(),
            code_class: default_code_class(),
        }
    }
}

impl OutputConfig {
    /// HTML writer options derived from this section.
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            wrap: self.wrap,
            code_class: self.code_class.clone(),
        }
    }
}
