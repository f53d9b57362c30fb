//! switchenv CLI
//!
//! Switches which named blocks of an env file are active.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Commands::List { json }) => commands::run_list(&cwd, &cli.file, json),
        Some(Commands::Switch { names, dry_run }) => {
            commands::run_switch(&cwd, &cli.file, &names, dry_run)
        }
        Some(Commands::Revert) => commands::run_revert(&cwd, &cli.file),
        Some(Commands::Completions { shell }) => {
            commands::run_completions(shell);
            Ok(())
        }
        // No subcommand: interactive switching.
        None => interactive::run_interactive_switch(&cwd, &cli.file),
    }
}
