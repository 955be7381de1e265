//! CLI for urlcanon.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcanon_core::{config, Canonicalizer};

use commands::{run_check, run_clean, run_dedup, run_denylist, run_list};

/// Top-level CLI for urlcanon.
#[derive(Debug, Parser)]
#[command(name = "urlcanon")]
#[command(about = "urlcanon: strip tracking parameters from URLs", long_about = None)]
pub struct Cli {
    /// Ignore the config file and use the built-in denylist.
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of each URL (reads stdin lines when none given).
    Clean {
        /// URLs to canonicalize.
        urls: Vec<String>,
    },

    /// Report whether a URL carries tracking parameters.
    Check {
        /// URL to inspect.
        url: String,
    },

    /// List the tracking parameters found in a URL, one per line.
    List {
        /// URL to inspect.
        url: String,
    },

    /// Collapse a list of URLs to unique canonical URLs.
    Dedup {
        /// File with one URL per line (stdin when omitted).
        path: Option<PathBuf>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective denylist.
    Denylist,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let canon = canonicalizer(cli.no_config)?;

        match cli.command {
            CliCommand::Clean { urls } => run_clean(&canon, &urls)?,
            CliCommand::Check { url } => run_check(&canon, &url)?,
            CliCommand::List { url } => run_list(&canon, &url)?,
            CliCommand::Dedup { path, json } => run_dedup(&canon, path.as_deref(), json)?,
            CliCommand::Denylist => run_denylist(&canon)?,
        }

        Ok(())
    }
}

fn canonicalizer(no_config: bool) -> Result<Canonicalizer> {
    if no_config {
        return Ok(Canonicalizer::default());
    }
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(Canonicalizer::new(cfg.denylist()))
}

#[cfg(test)]
mod tests;
