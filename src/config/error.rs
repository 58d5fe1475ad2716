//! Configuration validation errors.

/// Errors found while validating a loaded configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("theme.dim_opacity must be between 0.0 and 1.0 (got: {0})")]
    InvalidOpacity(f64),

    #[error("theme.{field} must not be empty")]
    EmptyColor { field: String },

    #[error("theme.{field} contains a forbidden character: {value:?}")]
    InvalidColor { field: String, value: String },
}
