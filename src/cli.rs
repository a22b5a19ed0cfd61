//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `taskrelay`.
#[derive(Debug, Parser)]
#[command(name = "taskrelay", version, about = "Relay game task boards to a collector")]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Watch the page and upload snapshots until interrupted.
    Run {
        /// Page to watch: an http(s) URL or a local HTML file.
        source: String,
    },
    /// Extract one snapshot, upload it, and exit.
    Once {
        /// Page to read: an http(s) URL or a local HTML file.
        source: String,
    },
    /// Extract one snapshot and print it as JSON, without uploading.
    Peek {
        /// Page to read: an http(s) URL or a local HTML file.
        source: String,
    },
}
