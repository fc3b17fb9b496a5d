use regex::Regex;
use scraper::ElementRef;

use super::{Page, selector};
use crate::{Error, ExtractOptions, FoundryCosts, FoundryPairing, Result};

/// Name of the first cell's resource, which carries no icon of its own.
pub const FIRST_CELL_RESOURCE: &str = "Credits";

/// `data-param2` of icon spans that name a resource in `data-param`.
const RESOURCE_PARAM: &str = "Resources";

struct Patterns {
	/// A count sits right after the `}` left over by the icon template.
	count: Regex,
	digits: Regex,
}

impl Patterns {
	fn new() -> Result<Self> {
		let compile = |re: &str| Regex::new(re).map_err(|e| Error::malformed("foundry pattern", e.to_string()));
		Ok(Self {
			count: compile(r"\}(\d{1,3}(?:,\d{3})+|\d+)")?,
			digits: compile(r"\d+")?,
		})
	}

	fn count(&self, text: &str) -> Result<Option<u64>> {
		let Some(m) = self.count.captures(text).and_then(|c| c.get(1)) else {
			return Ok(None);
		};
		m.as_str()
			.replace(',', "")
			.parse()
			.map(Some)
			.map_err(|e| Error::malformed("foundry count", format!("`{}`: {e}", m.as_str())))
	}

	/// The label baked into the cell in front of its count.
	fn label(&self, text: &str) -> String {
		let before = self.digits.split(text).next().unwrap_or_default();
		before.replace('\u{a0}', " ").trim().trim_end_matches('}').trim().to_string()
	}
}

/// Crafting costs from the page's foundry table; empty when there is none.
pub fn extract_costs(page: &Page, opts: &ExtractOptions) -> Result<FoundryCosts> {
	let Some(table) = page.find("table.foundrytable")? else {
		tracing::debug!("no foundry table");
		return Ok(FoundryCosts::new());
	};
	let row = data_row(table)?;
	let patterns = Patterns::new()?;

	match opts.foundry_pairing {
		FoundryPairing::PerCell => per_cell(row, &patterns, opts),
		FoundryPairing::Positional => positional(row, &patterns, opts),
	}
}

fn data_row(table: ElementRef<'_>) -> Result<ElementRef<'_>> {
	let td = selector("td")?;
	table
		.select(&selector("tr")?)
		.find(|tr| tr.select(&td).next().is_some())
		.ok_or_else(|| Error::malformed("foundry table", "no data row"))
}

fn icon_resource(cell: ElementRef<'_>) -> Result<Option<String>> {
	let icon = selector(&format!(r#"span[data-param2="{RESOURCE_PARAM}"]"#))?;
	Ok(cell
		.select(&icon)
		.find_map(|span| span.value().attr("data-param"))
		.map(str::to_string))
}

/// Reads name and count out of each cell together.
fn per_cell(row: ElementRef<'_>, patterns: &Patterns, opts: &ExtractOptions) -> Result<FoundryCosts> {
	let mut costs = FoundryCosts::new();
	for (idx, cell) in row.select(&selector("td")?).enumerate() {
		let text = cell.text().collect::<String>();
		let Some(count) = patterns.count(&text)? else {
			continue;
		};
		let name = match icon_resource(cell)? {
			Some(name) => name,
			None if idx == 0 => FIRST_CELL_RESOURCE.to_string(),
			None => patterns.label(&text),
		};
		if name.is_empty() {
			tracing::debug!(cell = idx, "foundry count without a resource name");
			continue;
		}
		if opts.is_excluded_resource(&name) {
			continue;
		}
		costs.insert(name, count);
	}
	Ok(costs)
}

/// Collects icon names and cell counts as two lists and zips them by index.
fn positional(row: ElementRef<'_>, patterns: &Patterns, opts: &ExtractOptions) -> Result<FoundryCosts> {
	let names = row
		.select(&selector(&format!(r#"span[data-param2="{RESOURCE_PARAM}"]"#))?)
		.filter_map(|span| span.value().attr("data-param"))
		.filter(|name| !opts.is_excluded_resource(name))
		.collect::<Vec<_>>();

	let mut counts = Vec::new();
	for cell in row.select(&selector("td")?) {
		if let Some(count) = patterns.count(&cell.text().collect::<String>())? {
			counts.push(count);
		}
	}

	if names.len() > counts.len() {
		return Err(Error::malformed(
			"foundry table",
			format!("{} resources but only {} counts", names.len(), counts.len()),
		));
	}

	let mut costs = FoundryCosts::new();
	for (name, count) in names.into_iter().zip(counts) {
		costs.insert(name, count);
	}
	Ok(costs)
}
