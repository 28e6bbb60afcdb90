use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for one session"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output rows and counts as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of ./tasklist.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log store activity at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run an interactive session reading commands from stdin (default)
    Session,
    /// Print the starting task list and count label
    Show,
    /// Print the effective configuration as TOML
    Config,
}
