//! CLI parse: clap types for linkcard. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkcard CLI - personal profile card inspection
#[derive(Parser)]
#[command(name = "linkcard")]
#[command(about = "Inspect and render the personal profile card configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the full profile card
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the card's links as the renderer would display them
    Links {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate the card structurally
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a starter profile file into the workspace
    Init {
        /// Overwrite an existing profile file
        #[arg(long)]
        force: bool,

        /// Show what would be written without creating it
        #[arg(long)]
        list: bool,
    },
}
