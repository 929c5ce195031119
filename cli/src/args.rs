//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Build the Prism landing page into a static HTML file")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to ./prism.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate content and write the page to disk
    Build {
        /// Output directory (overrides `build.out_dir`)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output file name (overrides `build.file_name`)
        #[arg(long)]
        file_name: Option<String>,
    },
    /// Print the page to stdout
    Render,
    /// Validate the content tables
    Check,
    /// Print the content tables as JSON
    Content {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}
