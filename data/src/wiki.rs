use std::time::Duration;

use crate::{Error, Result};

/// Weapon pages live under this prefix; the weapon name is appended verbatim.
pub const WIKI_URL: &str = "https://wiki.warframe.com/w/";

/// Category pages the name lists are scraped from.
pub const LIST_WIKI_URL: &str = "https://warframe.fandom.com/wiki/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("wfcatalog/", env!("CARGO_PKG_VERSION"));

/// Where weapon pages come from.
pub trait PageSource {
	/// HTML of the page for `name`.
	fn fetch(&self, name: &str) -> Result<String>;
}

/// Blocking wiki client. Each fetch is bounded by the agent's global timeout.
pub struct WikiClient {
	agent: ureq::Agent,
	base_url: String,
	user_agent: String,
}

impl WikiClient {
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
		let config = ureq::Agent::config_builder()
			.timeout_global(Some(timeout))
			.build();
		Self {
			agent: ureq::Agent::new_with_config(config),
			base_url: base_url.into(),
			user_agent: USER_AGENT.to_string(),
		}
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn url(&self, name: &str) -> String {
		format!("{}{name}", self.base_url)
	}
}

impl Default for WikiClient {
	fn default() -> Self {
		Self::new(WIKI_URL, DEFAULT_TIMEOUT)
	}
}

impl PageSource for WikiClient {
	fn fetch(&self, name: &str) -> Result<String> {
		let url = self.url(name);
		tracing::debug!(%url, "GET");
		self.agent
			.get(&url)
			.header("User-Agent", self.user_agent.as_str())
			.call()
			.map_err(|e| Error::fetch(&url, e))?
			.body_mut()
			.read_to_string()
			.map_err(|e| Error::fetch(&url, e))
	}
}
