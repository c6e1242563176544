//! CLI for the relurl URL model.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use relurl_core::config::{self, OutputFormat, RelurlConfig};
use std::path::PathBuf;

use commands::{run_full_path, run_inspect, run_search, run_set_search, run_update_search};

/// Top-level CLI for relurl.
#[derive(Debug, Parser)]
#[command(name = "relurl")]
#[command(about = "Inspect and rewrite absolute or relative URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/relurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show every component of a URL.
    Inspect {
        /// Absolute (scheme://host/...) or relative (/path?query#hash) URL.
        url: String,
    },

    /// Print pathname + search + hash.
    FullPath {
        /// Absolute or relative URL.
        url: String,
    },

    /// Show the decoded search data (repeated keys become lists).
    Search {
        /// Absolute or relative URL.
        url: String,
    },

    /// Replace the whole search string and print the new URL.
    SetSearch {
        /// Absolute or relative URL.
        url: String,
        /// Parameters as key=value; repeat a key to give it several values.
        pairs: Vec<String>,
    },

    /// Merge parameters into the search string and print the new URL.
    UpdateSearch {
        /// Absolute or relative URL.
        url: String,
        /// Parameters as key=value; existing keys are replaced.
        pairs: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(format) = cli.format {
            cfg.output = format.into();
        }
        tracing::debug!("loaded config: {:?}", cfg);

        cli.command.run(&cfg)
    }

    fn run(&self, cfg: &RelurlConfig) -> Result<()> {
        match self {
            CliCommand::Inspect { url } => run_inspect(url, cfg)?,
            CliCommand::FullPath { url } => run_full_path(url)?,
            CliCommand::Search { url } => run_search(url, cfg)?,
            CliCommand::SetSearch { url, pairs } => run_set_search(url, pairs)?,
            CliCommand::UpdateSearch { url, pairs } => run_update_search(url, pairs)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
