//! wfcatalog.
//!
//! Reads a weapon name list, extracts every weapon page and writes the catalog JSON.

mod cli;
mod config;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    // Structured logging. Use `RUST_LOG=debug` etc.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut cfg = Config::load_or_default(&config_path);
    cli.apply(&mut cfg);
    if cli.save_config {
        cfg.save(&config_path)?;
        tracing::info!(path = %config_path.display(), "saved config");
    }

    match cli.command {
        Command::Weapons { .. } => weapons(&cfg),
        Command::Lists => lists(&cfg),
    }
}

fn weapons(cfg: &Config) -> Result<()> {
    let list = fs::read_to_string(&cfg.weapons_list)
        .with_context(|| format!("read {:?}", cfg.weapons_list))?;
    let names = data::parse_name_list(&list);
    tracing::info!(count = names.len(), "loaded weapon list");

    let catalog = data::Catalog::assemble(&names, &cfg.weapon_client(), &cfg.extract);
    catalog.write_json(&cfg.output)?;

    let failed = catalog.failed().count();
    if failed > 0 {
        tracing::warn!(failed, "some weapons fell back to sentinel records");
    }
    tracing::info!(weapons = catalog.weapons.len(), path = %cfg.output.display(), "wrote catalog");
    Ok(())
}

fn lists(cfg: &Config) -> Result<()> {
    let client = cfg.list_client();
    write_list(&cfg.weapons_list, &data::lists::fetch_weapon_names(&client)?)?;
    write_list(&cfg.frames_list, &data::lists::fetch_frame_names(&client)?)?;
    Ok(())
}

fn write_list(path: &std::path::Path, names: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {:?}", parent))?;
    }
    fs::write(path, data::lists::to_list_file(names)).with_context(|| format!("write {:?}", path))?;
    tracing::info!(count = names.len(), path = %path.display(), "wrote name list");
    Ok(())
}
