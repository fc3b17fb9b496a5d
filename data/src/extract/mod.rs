//! Page extraction: one fetched wiki page in, one [`WeaponRecord`](crate::WeaponRecord) out.

use scraper::{ElementRef, Html, Selector};

use crate::{Error, ExtractOptions, Result, WeaponDetails, WeaponRecord};

pub mod acquisition;
pub mod foundry;
pub mod infobox;
pub mod text;

/// A parsed wiki page.
pub struct Page {
	html: Html,
}

impl Page {
	pub fn parse(html: &str) -> Self {
		Self {
			html: Html::parse_document(html),
		}
	}

	pub fn html(&self) -> &Html {
		&self.html
	}

	/// First element matching `css`, if any.
	pub fn find(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
		Ok(self.html.select(&selector(css)?).next())
	}
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
	Selector::parse(css).map_err(|_| Error::Selector(css.to_string()))
}

/// All text below `el`, concatenated and trimmed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
	el.text().collect::<String>().trim().to_string()
}

/// Collapses every whitespace run to a single space.
pub(crate) fn collapse_ws(s: &str) -> String {
	s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Runs every extractor over `page`. Any error fails the whole weapon.
pub fn extract_details(name: &str, page: &Page, opts: &ExtractOptions) -> Result<WeaponDetails> {
	let acquisition_table = acquisition::extract_table(name, page, opts)?;
	let acquisition_text = text::extract_acquisition_text(page);
	let foundry_costs = foundry::extract_costs(page, opts)?;
	let infobox = infobox::read(page)?;

	Ok(WeaponDetails {
		infobox,
		acquisition_text,
		acquisition_table,
		foundry_costs,
	})
}

/// Builds the record for `name` from its page HTML. Never fails: a page that can't be
/// read yields the sentinel record.
pub fn build_record(name: &str, html: &str, opts: &ExtractOptions) -> WeaponRecord {
	let page = Page::parse(html);
	match extract_details(name, &page, opts) {
		Ok(details) => WeaponRecord::extracted(name, details),
		Err(err) => {
			tracing::warn!(weapon = %name, error = %err, "extraction failed; using sentinel record");
			WeaponRecord::failed(name)
		}
	}
}
