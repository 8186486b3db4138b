//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "jdash-shell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer tools for the JBot dashboard login page")]
pub struct Cli {
    /// Dashboard config file (TOML); built-in defaults when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Click the login trigger on a headless copy of the login page
    Preview {
        /// Number of clicks (defaults to the reveal threshold)
        #[arg(long)]
        clicks: Option<u32>,
        /// Render the page without the flashed-messages banner
        #[arg(long)]
        without_banner: bool,
    },
    /// Print the Discord authorize URL the login trigger points at
    OauthUrl {},
}
