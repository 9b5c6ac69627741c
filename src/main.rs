//! ghpush - push a local project to GitHub in hand-picked batches.

mod cli;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use cli::deploy::{DeployPlan, deploy};
use utils::git::ShellGit;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    if which::which("git").is_err() {
        log!("error"; "`git` not found in PATH; install git and retry");
        return Ok(());
    }

    let root = std::env::current_dir()?;
    deploy(&root, &DeployPlan::default(), &ShellGit);

    Ok(())
}
