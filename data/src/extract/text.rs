use regex::Regex;
use scraper::ElementRef;

use super::{Page, collapse_ws, text_of};
use crate::{Error, NO_SOURCE, Result};

/// The prose paragraph under the "Acquisition" heading, or [`NO_SOURCE`] when the page
/// has none. Never fails.
pub fn extract_acquisition_text(page: &Page) -> String {
	match acquisition_paragraph(page) {
		Ok(text) => text,
		Err(err) => {
			tracing::debug!(error = %err, "no acquisition text");
			NO_SOURCE.to_string()
		}
	}
}

fn acquisition_paragraph(page: &Page) -> Result<String> {
	let marker = page
		.find("span#Acquisition")?
		.ok_or(Error::Absent("acquisition marker"))?;
	let heading = marker
		.parent()
		.and_then(ElementRef::wrap)
		.ok_or(Error::Absent("acquisition heading"))?;
	let paragraph = heading
		.next_siblings()
		.filter_map(ElementRef::wrap)
		.find(|e| e.value().name() == "p")
		.ok_or(Error::Absent("acquisition paragraph"))?;

	strip_citations(&text_of(paragraph))
}

/// Drops `{...}` template leftovers (greedy within a line) and collapses whitespace.
pub fn strip_citations(text: &str) -> Result<String> {
	let braces = Regex::new(r"\{.*\}").map_err(|e| Error::malformed("citation pattern", e.to_string()))?;
	Ok(collapse_ws(&braces.replace_all(text, "")))
}
