//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reply Scout: browse a user's comment history page by page
#[derive(Parser, Debug)]
#[command(name = "reply-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON); defaults to the platform config directory
    #[arg(short = 'C', long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the comment history of a user
    Query {
        /// User ID (defaults to the last one queried)
        subject_id: Option<String>,

        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Keep loading until the end of history
        #[arg(long, conflicts_with = "pages")]
        all: bool,
    },

    /// Browse interactively: Enter loads more, a new ID starts a new query
    Browse {
        /// User ID to start with (defaults to the last one queried)
        subject_id: Option<String>,
    },

    /// Show or update the endpoint configuration
    Config {
        /// API path, e.g. /v1/replies
        #[arg(long)]
        path: Option<String>,

        /// Upstream host (stored for reference; requests go through --origin)
        #[arg(long)]
        host: Option<String>,

        /// Origin of the local proxy requests are sent to
        #[arg(long)]
        origin: Option<String>,

        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

impl Commands {
    /// Whether a config invocation changes anything
    pub fn is_config_update(&self) -> bool {
        matches!(
            self,
            Commands::Config {
                path,
                host,
                origin,
                page_size,
                timeout_secs,
            } if path.is_some()
                || host.is_some()
                || origin.is_some()
                || page_size.is_some()
                || timeout_secs.is_some()
        )
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Pretty,
    /// JSON output (one record per line)
    Json,
}
