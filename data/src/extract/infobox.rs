use scraper::{ElementRef, node::Element};

use super::{Page, selector, text_of};
use crate::{Error, Infobox, Result};

/// How a label is recognised in the label/value pair layout.
#[derive(Debug, Clone, Copy)]
pub enum Label {
	/// The label holds a link with this `title`.
	Title(&'static str),
	/// The label's own text equals this.
	Text(&'static str),
}

/// One infobox attribute and the two ways it can be keyed.
#[derive(Debug, Clone, Copy)]
pub struct Field {
	/// Value of the `data-source` attribute on portable-infobox pages.
	pub data_source: &'static str,
	pub label: Label,
}

pub const MASTERY_RANK: Field = Field {
	data_source: "Mastery",
	label: Label::Title("Mastery Rank"),
};
pub const WEAPON_CLASS: Field = Field {
	data_source: "Class",
	label: Label::Title("Mod/Compatibility"),
};
pub const MAX_RANK: Field = Field {
	data_source: "MaxRank",
	label: Label::Text("Max Rank"),
};
pub const SLOT: Field = Field {
	data_source: "Slot",
	label: Label::Title("Weapons"),
};

/// Reads the scalar attributes of the page's infobox. A missing label leaves its field
/// `None`; a missing infobox or a label with no value is an error.
pub fn read(page: &Page) -> Result<Infobox> {
	let container = page
		.find("div.infobox, aside.portable-infobox")?
		.ok_or(Error::Absent("infobox"))?;

	Ok(Infobox {
		mastery_rank: find_value(container, MASTERY_RANK)?,
		weapon_class: find_value(container, WEAPON_CLASS)?,
		max_rank: find_value(container, MAX_RANK)?,
		slot: find_value(container, SLOT)?,
	})
}

/// Looks `field` up by `data-source` first, then by its label.
pub fn find_value(container: ElementRef<'_>, field: Field) -> Result<Option<String>> {
	if let Some(value) = find_data_source(container, field.data_source)? {
		return Ok(Some(value));
	}
	match field.label {
		Label::Title(title) => find_label(container, title),
		Label::Text(text) => find_label_text(container, text),
	}
}

/// Value cell keyed by `data-source`. Horizontal groups carry the attribute on both the
/// `th` label and the `td` value, so only value cells are matched.
fn find_data_source(container: ElementRef<'_>, key: &str) -> Result<Option<String>> {
	let value = selector(&format!(
		r#"[data-source="{key}"] .pi-data-value, td[data-source="{key}"]"#
	))?;
	Ok(container.select(&value).next().map(text_of))
}

/// Value of the label/value pair whose label links to `title`.
pub fn find_label(container: ElementRef<'_>, title: &str) -> Result<Option<String>> {
	let anchor = selector(&format!(r#"a[title="{title}"]"#))?;
	for label in container.select(&selector("div.label.left")?) {
		if label.select(&anchor).next().is_some() {
			return value_of(label, title).map(Some);
		}
	}
	Ok(None)
}

/// Value of the label/value pair whose label text is exactly `text`.
pub fn find_label_text(container: ElementRef<'_>, text: &str) -> Result<Option<String>> {
	for label in container.select(&selector("div.label.left")?) {
		if text_of(label) == text {
			return value_of(label, text).map(Some);
		}
	}
	Ok(None)
}

fn value_of(label: ElementRef<'_>, what: &str) -> Result<String> {
	next_sibling_where(label, is_value_cell)
		.map(text_of)
		.ok_or_else(|| Error::malformed("infobox", format!("label `{what}` has no value")))
}

fn is_value_cell(el: &Element) -> bool {
	el.name() == "div" && el.classes().any(|c| c == "value") && el.classes().any(|c| c == "right")
}

fn next_sibling_where<'a>(el: ElementRef<'a>, pred: impl Fn(&Element) -> bool) -> Option<ElementRef<'a>> {
	el.next_siblings()
		.filter_map(ElementRef::wrap)
		.find(|e| pred(e.value()))
}
