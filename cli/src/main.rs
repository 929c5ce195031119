//! # prism
//!
//! Builds the Prism landing page into a static HTML file.
//!
//! ```bash
//! # Write dist/index.html
//! prism build
//!
//! # Somewhere else
//! prism build --out-dir public
//!
//! # Pipe the page elsewhere
//! prism render > index.html
//! ```

mod args;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use args::{Args, Command};
use config::PrismConfig;

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the page for `prism render`
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => PrismConfig::load_from_path(path),
        None => PrismConfig::load(std::path::Path::new(".")),
    };

    match args.command {
        Command::Build { out_dir, file_name } => {
            if let Some(dir) = out_dir {
                config.build.out_dir = dir;
            }
            if let Some(name) = file_name {
                config.build.file_name = name;
            }
            info!("Building prism v{}", env!("CARGO_PKG_VERSION"));
            commands::build(&config)?;
        }
        Command::Render => commands::render()?,
        Command::Check => commands::check()?,
        Command::Content { pretty } => commands::content(pretty)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[prism] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
