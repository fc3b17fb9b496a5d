//! Scrapers for the weapon and warframe name lists that drive the catalog.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
	PageSource, WikiClient,
	extract::{Page, selector},
};

/// `data-param2` of icon spans that name a weapon.
const WEAPON_PARAM: &str = "Weapons";

/// Weapon names from the icon spans of the "Weapons" category page, with any
/// parenthesised suffix removed and spaces as underscores. Sorted, no duplicates.
pub fn weapon_names(html: &str) -> Result<Vec<String>> {
	let page = Page::parse(html);
	let suffix = Regex::new(r"\(.*\)").context("Compile suffix regex")?;

	let names = page
		.html()
		.select(&selector("span[data-param][data-param2]")?)
		.filter(|span| span.value().attr("data-param2") == Some(WEAPON_PARAM))
		.filter_map(|span| span.value().attr("data-param"))
		.map(|name| suffix.replace_all(name, "").trim().replace(' ', "_"))
		.filter(|name| !name.is_empty())
		.collect::<BTreeSet<_>>();

	Ok(names.into_iter().collect())
}

/// Warframe names from the titled links inside the current navigation tab.
/// Update pages are skipped.
pub fn frame_names(html: &str) -> Result<Vec<String>> {
	let page = Page::parse(html);
	let mut names = page
		.html()
		.select(&selector("div.wds-is-current a[title]")?)
		.filter_map(|a| a.value().attr("title"))
		.filter(|title| !title.contains("Update"))
		.map(|title| title.replace(' ', "_").trim().to_string())
		.collect::<Vec<_>>();
	names.sort();
	names.dedup();
	Ok(names)
}

pub fn fetch_weapon_names(client: &WikiClient) -> Result<Vec<String>> {
	let html = client.fetch("Weapons").context("GET Weapons")?;
	weapon_names(&html)
}

pub fn fetch_frame_names(client: &WikiClient) -> Result<Vec<String>> {
	let html = client.fetch("Warframes").context("GET Warframes")?;
	frame_names(&html)
}

/// The on-disk list format: names joined by commas.
pub fn to_list_file(names: &[String]) -> String {
	names.join(",")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn weapon_names_are_cleaned_and_sorted() {
		let html = r#"
			<span data-param="Lato Prime" data-param2="Weapons"></span>
			<span data-param="Braton (Weapon)" data-param2="Weapons"></span>
			<span data-param="Braton" data-param2="Weapons"></span>
			<span data-param="Ferrite" data-param2="Resources"></span>
			<span data-param="Orphan"></span>"#;
		assert_eq!(weapon_names(html).unwrap(), ["Braton", "Lato_Prime"]);
	}

	#[test]
	fn frame_names_skip_updates() {
		let html = r#"
			<div class="wds-tab__content">
				<a title="Hidden Frame">x</a>
			</div>
			<div class="wds-tab__content wds-is-current">
				<a title="Volt Prime">Volt Prime</a>
				<a title="Update 35">Update</a>
				<a title="Ash">Ash</a>
				<a href="/no-title">nothing</a>
			</div>"#;
		assert_eq!(frame_names(html).unwrap(), ["Ash", "Volt_Prime"]);
	}

	#[test]
	fn list_file_is_comma_joined() {
		assert_eq!(to_list_file(&["Ash".into(), "Volt".into()]), "Ash,Volt");
	}
}
