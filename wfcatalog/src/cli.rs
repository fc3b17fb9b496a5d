use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Builds a JSON weapon catalog from the Warframe wiki.
#[derive(Debug, Parser)]
#[command(name = "wfcatalog", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/wfcatalog.json).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the effective configuration back to the config file.
    #[arg(long, global = true)]
    pub save_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every weapon in the name list and write the catalog.
    Weapons {
        /// Comma-separated weapon names.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Catalog JSON destination.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Per-page fetch deadline in seconds.
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Scrape the weapon and warframe name lists.
    Lists,
}

impl Cli {
    /// Overlays command-line values on `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Command::Weapons { input, output, timeout } = &self.command {
            if let Some(input) = input {
                cfg.weapons_list = input.clone();
            }
            if let Some(output) = output {
                cfg.output = output.clone();
            }
            if let Some(timeout) = timeout {
                cfg.timeout_s = *timeout;
            }
        }
    }
}
