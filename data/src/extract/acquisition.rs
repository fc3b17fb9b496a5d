use scraper::ElementRef;

use super::{Page, selector, text_of};
use crate::{AcquisitionTable, DropSourceLabel, Error, ExtractOptions, RelicColumn, Result};

/// Marks a vaulted relic in a relic-grid cell.
pub const VAULTED_MARKER: &str = "(V)";

/// Which strategy a page's acquisition table calls for.
pub enum Shape<'a> {
	Drops(ElementRef<'a>),
	RelicGrid,
	Empty,
}

/// Decides up front how the acquisition table of `name` is read.
pub fn classify<'a>(name: &str, page: &'a Page) -> Result<Shape<'a>> {
	if let Some(table) = page.find("table.acquisition-table")? {
		return Ok(Shape::Drops(table));
	}
	if name.contains("Prime") {
		return Ok(Shape::RelicGrid);
	}
	Ok(Shape::Empty)
}

pub fn extract_table(name: &str, page: &Page, opts: &ExtractOptions) -> Result<AcquisitionTable> {
	match classify(name, page)? {
		Shape::Drops(table) => drop_rows(table, opts.drop_source).map(AcquisitionTable::Drops),
		Shape::RelicGrid => relic_grid(page).map(AcquisitionTable::Relics),
		Shape::Empty => {
			tracing::debug!(weapon = %name, "no acquisition table");
			Ok(AcquisitionTable::Empty)
		}
	}
}

/// Body rows of a regular acquisition table. Header rows and rows without cells are skipped.
pub fn drop_rows(table: ElementRef<'_>, label: DropSourceLabel) -> Result<Vec<Vec<String>>> {
	let th = selector("th")?;
	let td = selector("td")?;
	let hidden = selector("span.hidden")?;

	let mut rows = Vec::new();
	for tr in table.select(&selector("tbody > tr")?) {
		if tr.select(&th).next().is_some() {
			continue;
		}
		let row = tr
			.select(&td)
			.enumerate()
			.map(|(idx, cell)| {
				let text = match (idx, label) {
					(0, DropSourceLabel::HiddenSpanSibling) => cell
						.select(&hidden)
						.next()
						.and_then(text_after)
						.unwrap_or_else(|| text_of(cell)),
					_ => text_of(cell),
				};
				clean_cell(&text)
			})
			.collect::<Vec<_>>();
		if !row.is_empty() {
			rows.push(row);
		}
	}
	Ok(rows)
}

/// Text of the first non-blank node after `el`, whether it is a text node or an element.
fn text_after(el: ElementRef<'_>) -> Option<String> {
	el.next_siblings()
		.filter_map(|node| match node.value().as_text() {
			Some(text) => Some(String::from(&**text)),
			None => ElementRef::wrap(node).map(|e| e.text().collect()),
		})
		.find(|text| !text.trim().is_empty())
}

fn clean_cell(s: &str) -> String {
	s.replace('\n', "").trim().to_string()
}

/// Relic grid of a Prime weapon: each data cell becomes one column paired with the
/// header at the same position.
pub fn relic_grid(page: &Page) -> Result<Vec<RelicColumn>> {
	let table = page
		.find("table.article-table")?
		.ok_or(Error::Absent("relic grid"))?;
	let headers = table.select(&selector("th")?).map(text_of).collect::<Vec<_>>();

	table
		.select(&selector("td")?)
		.enumerate()
		.map(|(idx, cell)| {
			let header = headers.get(idx).cloned().ok_or_else(|| {
				Error::malformed("relic grid", format!("cell {idx} has no header ({} headers)", headers.len()))
			})?;
			let text = cell.text().collect::<String>();
			let tokens = text.split_whitespace().collect::<Vec<_>>();
			Ok(RelicColumn {
				header,
				relics: group_relics(&tokens),
			})
		})
		.collect()
}

/// Folds tokens into `tier name rarity` descriptors, stopping where a window would
/// start at the vaulted marker. A short trailing window is kept as-is.
pub fn group_relics(tokens: &[&str]) -> Vec<String> {
	let mut relics = Vec::new();
	let mut i = 0;
	while i < tokens.len() {
		if tokens[i] == VAULTED_MARKER {
			break;
		}
		let end = (i + 3).min(tokens.len());
		relics.push(tokens[i..end].join(" "));
		i += 3;
	}
	relics
}
