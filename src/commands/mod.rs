//! Command handlers for the termblock CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod render;

use anyhow::Result;
use std::path::Path;

use termblock::Config;

/// Load the config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
