//! Persistent application configuration.
//!
//! Stored as JSON in a platform-appropriate config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix every weapon name is appended to.
    pub wiki_url: String,

    /// Prefix of the category pages the name lists are scraped from.
    pub list_wiki_url: String,

    /// Deadline (seconds) for a single page fetch.
    pub timeout_s: u64,

    pub user_agent: Option<String>,

    /// Comma-separated weapon names, read by `weapons`, written by `lists`.
    pub weapons_list: PathBuf,
    pub frames_list: PathBuf,

    /// Where the catalog JSON goes.
    pub output: PathBuf,

    /// Strategies for markup whose reading is still undecided.
    pub extract: data::ExtractOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki_url: data::WIKI_URL.to_string(),
            list_wiki_url: data::LIST_WIKI_URL.to_string(),
            timeout_s: data::DEFAULT_TIMEOUT.as_secs(),
            user_agent: None,
            weapons_list: PathBuf::from("lists/weapons_list.txt"),
            frames_list: PathBuf::from("lists/frames_list.txt"),
            output: PathBuf::from("data/weapons.json"),
            extract: data::ExtractOptions::default(),
        }
    }
}

impl Config {
    /// Default path to the config file.
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("config_dir() unavailable")?;
        Ok(base.join("wfcatalog.json"))
    }

    /// Load configuration, falling back to defaults if it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config; using defaults");
                Self::default()
            }
        }
    }

    /// Try to load configuration from `path`. A missing file is not an error.
    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
        let cfg = serde_json::from_str(&json).with_context(|| format!("parse {:?}", path))?;
        Ok(cfg)
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, json).with_context(|| format!("write {:?}", path))?;
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_s)
    }

    fn client(&self, base_url: &str) -> data::WikiClient {
        let client = data::WikiClient::new(base_url, self.timeout());
        match &self.user_agent {
            Some(ua) => client.with_user_agent(ua.as_str()),
            None => client,
        }
    }

    pub fn weapon_client(&self) -> data::WikiClient {
        self.client(&self.wiki_url)
    }

    pub fn list_client(&self) -> data::WikiClient {
        self.client(&self.list_wiki_url)
    }
}
