//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use termblock::Config;

/// Resolve the config file path: explicit `--config` or the default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path)?.display());
    Ok(())
}

/// Write the default configuration to disk.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = resolve_path(path)?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}\nHint: Use --force to overwrite it.",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
