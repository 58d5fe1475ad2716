//! termblock - CLI entry point

mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termblock::cli::{Cli, Commands, ConfigCommands};

use commands::render::RenderArgs;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` / `-vv` raise the level from
/// the default of `warn`.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        "Starting termblock"
    );

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render {
            file,
            format,
            fragment,
            no_shorthands,
        } => {
            let config = commands::load_config(config_path)?;
            let args = RenderArgs {
                format,
                fragment,
                no_shorthands,
            };
            commands::render::handle(file.as_deref(), args, &config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
