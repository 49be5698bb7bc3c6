//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// plugsync - Pull engine-side plugin edits back into local packages
#[derive(Parser, Debug)]
#[command(name = "plugsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root folder to resolve from (defaults to the executable's folder)
    #[arg(long, global = true, env = "PLUGSYNC_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (.toml, .json or .yaml) instead of <root>/plugsync.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved root, workspace and game folders
    Check,

    /// List local packages and their installed modules
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show which modules would be patched or skipped
    Plan {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Copy installed modules over their local sources
    ///
    /// Runs as a dry run unless --apply is given. Each overwritten local
    /// module is first renamed to <module>.backup.<epoch-millis>.
    ///
    /// Examples:
    ///   plugsync patch               # Preview transfers
    ///   plugsync patch --apply       # Back up and overwrite
    Patch {
        /// Back up and overwrite local modules
        #[arg(long)]
        apply: bool,
    },
}
