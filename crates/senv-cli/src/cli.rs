//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// switchenv - toggle named blocks of variables in an env file
///
/// Running `senv` with no command opens an interactive checklist of the
/// file's blocks.
#[derive(Parser, Debug)]
#[command(name = "senv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the env file to operate on
    #[arg(short, long, global = true, default_value = senv_fs::DEFAULT_ENV_FILE)]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List blocks and their activation state
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Activate exactly the given blocks, deactivating all others
    ///
    /// Examples:
    ///   senv switch Dev            # only Dev active
    ///   senv switch Dev Staging    # Dev and Staging active
    ///   senv switch                # comment out every named block
    Switch {
        /// Blocks that should end up active
        names: Vec<String>,

        /// Preview the rewrite as a diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Restore the env file to its last committed content
    Revert,

    /// Generate shell completions
    ///
    /// Examples:
    ///   senv completions bash > ~/.local/share/bash-completion/completions/senv
    ///   senv completions zsh > ~/.zfunc/_senv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
