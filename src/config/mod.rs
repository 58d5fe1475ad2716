//! Configuration management for termblock

mod error;
mod io;
mod types;

pub use error::ConfigError;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Characters that would let a palette value escape its CSS declaration.
const FORBIDDEN_CSS_CHARS: [char; 5] = [';', '"', '<', '>', '{'];

impl Config {
    /// Get the config file path (~/.config/termblock/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check palette values.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let theme = &self.theme;
        if !(0.0..=1.0).contains(&theme.dim_opacity) {
            return Err(ConfigError::InvalidOpacity(theme.dim_opacity));
        }

        let named = theme
            .normal
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("normal[{}]", i), v))
            .chain(
                theme
                    .bright
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (format!("bright[{}]", i), v)),
            );
        let fields = [
            ("default_foreground".to_string(), &theme.default_foreground),
            ("default_background".to_string(), &theme.default_background),
        ]
        .into_iter()
        .chain(named);

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyColor { field });
            }
            if value.contains(FORBIDDEN_CSS_CHARS) {
                return Err(ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
