//! xtask - Build tasks for termblock
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use termblock::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for termblock")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages for the command tree using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    write_man_page(&man_dir, &Cli::command(), "termblock")?;

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Write `<page_name>.1` for `cmd`, then recurse into visible subcommands.
fn write_man_page(man_dir: &Path, cmd: &Command, page_name: &str) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;

    let path = man_dir.join(format!("{}.1", page_name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        write_man_page(man_dir, sub, &format!("{}-{}", page_name, sub.get_name()))?;
    }
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# termblock Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    push_command_section(&mut markdown, &cmd, "termblock");

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Append the section for one command and all of its visible subcommands.
fn push_command_section(markdown: &mut String, cmd: &Command, full_name: &str) {
    markdown.push_str(&format!("## {}\n\n", full_name));

    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    let args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    if !args.is_empty() {
        markdown.push_str("### Arguments\n\n");
        for arg in args {
            let label = match arg.get_long() {
                Some(long) => format!("--{}", long),
                None => format!("<{}>", arg.get_id().as_str().to_uppercase()),
            };
            markdown.push_str(&format!("- `{}`", label));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!(": {}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        push_command_section(markdown, sub, &format!("{} {}", full_name, sub.get_name()));
    }
}
