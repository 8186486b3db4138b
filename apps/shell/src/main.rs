#![allow(clippy::print_stdout)]

mod args;
mod preview;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use jdash_domain::config::DashboardConfig;
use jdash_kernel::config::load_config;
use jdash_kernel::oauth::authorize_url;
use jdash_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).level(level).init()?;

    let config: DashboardConfig = match &cli.config {
        Some(path) => load_config(Some(path))
            .with_context(|| format!("Loading {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    match cli.command {
        Commands::Preview { clicks, without_banner } => {
            let report = preview::run(&config.reveal, clicks, !without_banner)?;
            print!("{report}");
        },
        Commands::OauthUrl {} => {
            println!("{}", authorize_url(&config.discord)?);
        },
    }

    Ok(())
}
