use std::collections::HashMap;
use std::io::{Error as IoError, ErrorKind};

use data::{AcquisitionTable, Catalog, Error, ExtractOptions, PageSource, WeaponRecord};

const BRATON: &str = include_str!("fixtures/braton.html");
const BRATON_PRIME: &str = include_str!("fixtures/braton_prime.html");

/// Serves fixture pages; names without a fixture time out.
struct Fixtures(HashMap<&'static str, &'static str>);

impl Fixtures {
	fn new() -> Self {
		Self(HashMap::from([("Braton", BRATON), ("Braton_Prime", BRATON_PRIME), ("Lato", "<p>no infobox</p>")]))
	}
}

impl PageSource for Fixtures {
	fn fetch(&self, name: &str) -> data::Result<String> {
		self.0
			.get(name)
			.map(|html| html.to_string())
			.ok_or_else(|| Error::fetch(name, IoError::new(ErrorKind::TimedOut, "timed out")))
	}
}

fn names(list: &str) -> Vec<String> {
	data::parse_name_list(list)
}

#[test]
fn one_record_per_name_in_order() {
	let names = names("Braton_Prime,Missing,Braton,Lato,Braton");
	let catalog = Catalog::assemble(&names, &Fixtures::new(), &ExtractOptions::default());

	let out = catalog.weapons.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
	assert_eq!(out, ["Braton_Prime", "Missing", "Braton", "Lato", "Braton"]);
	assert_eq!(catalog.failed().map(|w| w.name.as_str()).collect::<Vec<_>>(), ["Missing", "Lato"]);
}

#[test]
fn empty_entry_still_gets_a_record() {
	let catalog = Catalog::assemble(&names("Braton,,Lato\n"), &Fixtures::new(), &ExtractOptions::default());

	let out = catalog.weapons.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
	assert_eq!(out, ["Braton", "", "Lato"]);
	assert_eq!(catalog.weapons[1], WeaponRecord::failed(""));
}

#[test]
fn timeout_only_affects_its_own_record() {
	let fixtures = Fixtures::new();
	let opts = ExtractOptions::default();
	let alone = Catalog::assemble(&names("Braton"), &fixtures, &opts);
	let with_timeout = Catalog::assemble(&names("Missing,Braton"), &fixtures, &opts);

	assert_eq!(with_timeout.weapons[0], WeaponRecord::failed("Missing"));
	assert_eq!(with_timeout.weapons[1], alone.weapons[0]);
}

#[test]
fn regular_weapon_page() {
	let catalog = Catalog::assemble(&names("Braton"), &Fixtures::new(), &ExtractOptions::default());
	let details = catalog.weapons[0].details.as_ref().expect("extracted");

	assert_eq!(details.infobox.mastery_rank.as_deref(), Some("0"));
	assert_eq!(details.infobox.weapon_class.as_deref(), Some("Rifle"));
	assert_eq!(details.infobox.max_rank.as_deref(), Some("30"));
	assert_eq!(details.infobox.slot.as_deref(), Some("Primary"));
	assert_eq!(
		details.acquisition_text,
		"The Braton's blueprint can be purchased from the Market for 25,000 Credits."
	);
	assert_eq!(
		details.acquisition_table,
		AcquisitionTable::Drops(vec![vec!["Grineer Lancer".to_string(), "0.5%".to_string()]])
	);
	assert_eq!(details.foundry_costs.entries(), ["Credits: 15000", "Ferrite: 150", "Plastids: 25"]);
	assert_eq!(details.foundry_costs.get("Platinum"), None);
}

#[test]
fn prime_weapon_page_uses_relic_grid() {
	let catalog = Catalog::assemble(&names("Braton_Prime"), &Fixtures::new(), &ExtractOptions::default());
	let details = catalog.weapons[0].details.as_ref().expect("extracted");

	assert_eq!(details.infobox.mastery_rank.as_deref(), Some("8"));
	assert_eq!(details.infobox.max_rank, None);
	assert_eq!(
		details.acquisition_table.rows(),
		vec![
			vec!["Blueprint".to_string(), "Axi A1 Common,Axi A2 Uncommon".to_string()],
			vec!["Barrel".to_string(), "Lith B1 Rare".to_string()],
		]
	);
	assert!(details.foundry_costs.is_empty());
}

#[test]
fn output_is_byte_identical_across_runs() {
	let names = names("Braton,Braton_Prime,Missing");
	let opts = ExtractOptions::default();
	let a = Catalog::assemble(&names, &Fixtures::new(), &opts).to_json().unwrap();
	let b = Catalog::assemble(&names, &Fixtures::new(), &opts).to_json().unwrap();
	assert_eq!(a, b);
}

#[test]
fn writes_weapons_document() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("data").join("weapons.json");
	let catalog = Catalog::assemble(&names("Missing,Braton"), &Fixtures::new(), &ExtractOptions::default());
	catalog.write_json(&path).unwrap();

	let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
	let weapons = json["weapons"].as_array().unwrap();
	assert_eq!(weapons.len(), 2);
	assert_eq!(weapons[0]["masteryRank"], "-1");
	assert_eq!(weapons[0]["acquisitionText"], "-1");
	assert_eq!(weapons[1]["foundryCosts"][1], "Ferrite: 150");
	assert_eq!(weapons[1]["acquisitionTable"][0][0], "Grineer Lancer");
}
