use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{ExtractOptions, PageSource, WeaponRecord, extract};

/// The output document: `{"weapons": [...]}`, in name-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
	pub weapons: Vec<WeaponRecord>,
}

/// Splits a comma-separated name list. Entries are kept verbatim, empty ones included;
/// only the line break ending the file is dropped.
pub fn parse_name_list(text: &str) -> Vec<String> {
	let text = text.trim_end_matches(['\r', '\n']);
	if text.is_empty() {
		return Vec::new();
	}
	text.split(',').map(str::to_string).collect()
}

impl Catalog {
	/// Fetches and extracts every name in order, one record per name. A failed fetch
	/// yields the sentinel record for that name and the loop moves on.
	pub fn assemble<S: PageSource + ?Sized>(names: &[String], source: &S, opts: &ExtractOptions) -> Self {
		let total = names.len();
		let weapons = names
			.iter()
			.enumerate()
			.map(|(i, name)| {
				tracing::info!("processing weapon {} of {total}: {name}", i + 1);
				match source.fetch(name) {
					Ok(html) => extract::build_record(name, &html, opts),
					Err(err) => {
						tracing::warn!(weapon = %name, error = %err, "fetch failed; using sentinel record");
						WeaponRecord::failed(name.as_str())
					}
				}
			})
			.collect();
		Self { weapons }
	}

	pub fn failed(&self) -> impl Iterator<Item = &WeaponRecord> {
		self.weapons.iter().filter(|w| w.is_failed())
	}

	/// Pretty JSON with 4-space indentation.
	pub fn to_json(&self) -> Result<String> {
		let mut buf = Vec::new();
		let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
		let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
		self.serialize(&mut ser).context("Serialize catalog")?;
		String::from_utf8(buf).context("Catalog JSON is not UTF-8")
	}

	/// Writes the catalog to `path`, creating parent directories as needed.
	pub fn write_json(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent).with_context(|| format!("Create dir {}", parent.display()))?;
		}
		let json = self.to_json()?;
		let file = File::create(path).with_context(|| format!("Create {}", path.display()))?;
		let mut writer = BufWriter::new(file);
		writer
			.write_all(json.as_bytes())
			.with_context(|| format!("Write {}", path.display()))?;
		writer.flush().with_context(|| format!("Flush {}", path.display()))?;
		Ok(())
	}
}
