use serde::{Deserialize, Serialize, Serializer};

/// Value written in place of every scalar field of a record whose extraction failed.
pub const SENTINEL: &str = "-1";

/// Acquisition text used when a page has no readable "Acquisition" section.
pub const NO_SOURCE: &str = "No available source for the item yet";

/// How the first cell of an acquisition-table row is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropSourceLabel {
	/// The visible text is decorative; the source name is the text node following the
	/// cell's `span.hidden`. Cells without such a span are read verbatim.
	#[default]
	HiddenSpanSibling,
	/// Every cell is read verbatim.
	Verbatim,
}

/// How foundry resource names are matched to their counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundryPairing {
	/// Name and count are read from the same cell.
	#[default]
	PerCell,
	/// Icon names and counts are collected separately and zipped by index.
	Positional,
}

/// Knobs for markup whose intended reading is still an open question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
	/// Drop "Standing" from foundry costs. "Platinum" is always dropped.
	pub exclude_standing: bool,
	pub drop_source: DropSourceLabel,
	pub foundry_pairing: FoundryPairing,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			exclude_standing: true,
			drop_source: DropSourceLabel::default(),
			foundry_pairing: FoundryPairing::default(),
		}
	}
}

impl ExtractOptions {
	/// Whether `name` is a placeholder rather than a crafting material.
	pub fn is_excluded_resource(&self, name: &str) -> bool {
		name == "Platinum" || (self.exclude_standing && name == "Standing")
	}
}

/// Scalar attributes read from the infobox. `None` means the label is not on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infobox {
	pub mastery_rank: Option<String>,
	pub weapon_class: Option<String>,
	pub max_rank: Option<String>,
	pub slot: Option<String>,
}

/// One column of a relic grid: the header and its `tier name rarity` descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelicColumn {
	pub header: String,
	pub relics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AcquisitionTable {
	/// Rows of a regular drop table, one string per column.
	Drops(Vec<Vec<String>>),
	/// Relic grid of a Prime weapon.
	Relics(Vec<RelicColumn>),
	#[default]
	Empty,
}

impl AcquisitionTable {
	/// Flattens either shape into rows of strings. Relic columns become
	/// `[header, "relic,relic,..."]`.
	pub fn rows(&self) -> Vec<Vec<String>> {
		match self {
			Self::Drops(rows) => rows.clone(),
			Self::Relics(columns) => columns
				.iter()
				.map(|c| vec![c.header.clone(), c.relics.join(",")])
				.collect(),
			Self::Empty => Vec::new(),
		}
	}
}

/// Crafting costs in page order. Names are unique; inserting a name again
/// replaces its count but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundryCosts(Vec<(String, u64)>);

impl FoundryCosts {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, count: u64) {
		let name = name.into();
		match self.0.iter_mut().find(|(n, _)| *n == name) {
			Some(entry) => entry.1 = count,
			None => self.0.push((name, count)),
		}
	}

	pub fn get(&self, name: &str) -> Option<u64> {
		self.0.iter().find(|(n, _)| n == name).map(|(_, c)| *c)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.0.iter().map(|(n, c)| (n.as_str(), *c))
	}

	/// `"Name: Count"` lines, the catalog's external format.
	pub fn entries(&self) -> Vec<String> {
		self.iter().map(|(name, count)| format!("{name}: {count}")).collect()
	}
}

impl Serialize for FoundryCosts {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter().map(|(name, count)| format!("{name}: {count}")))
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponDetails {
	pub infobox: Infobox,
	pub acquisition_text: String,
	pub acquisition_table: AcquisitionTable,
	pub foundry_costs: FoundryCosts,
}

/// One catalog entry. `details` is `None` when extraction failed for this name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponRecord {
	pub name: String,
	pub details: Option<WeaponDetails>,
}

impl WeaponRecord {
	pub fn extracted(name: impl Into<String>, details: WeaponDetails) -> Self {
		Self {
			name: name.into(),
			details: Some(details),
		}
	}

	/// The sentinel record substituted for a weapon whose page could not be read.
	pub fn failed(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			details: None,
		}
	}

	pub fn is_failed(&self) -> bool {
		self.details.is_none()
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordRepr<'a> {
	name: &'a str,
	mastery_rank: Option<&'a str>,
	weapon_class: Option<&'a str>,
	max_rank: Option<&'a str>,
	slot: Option<&'a str>,
	acquisition_text: &'a str,
	acquisition_table: Vec<Vec<String>>,
	foundry_costs: Vec<String>,
	extracted: bool,
}

impl Serialize for WeaponRecord {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let repr = match &self.details {
			Some(d) => RecordRepr {
				name: &self.name,
				mastery_rank: d.infobox.mastery_rank.as_deref(),
				weapon_class: d.infobox.weapon_class.as_deref(),
				max_rank: d.infobox.max_rank.as_deref(),
				slot: d.infobox.slot.as_deref(),
				acquisition_text: &d.acquisition_text,
				acquisition_table: d.acquisition_table.rows(),
				foundry_costs: d.foundry_costs.entries(),
				extracted: true,
			},
			None => RecordRepr {
				name: &self.name,
				mastery_rank: Some(SENTINEL),
				weapon_class: Some(SENTINEL),
				max_rank: Some(SENTINEL),
				slot: Some(SENTINEL),
				acquisition_text: SENTINEL,
				acquisition_table: Vec::new(),
				foundry_costs: Vec::new(),
				extracted: false,
			},
		};
		repr.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_record_serializes_all_sentinels() {
		let json = serde_json::to_value(WeaponRecord::failed("Braton")).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"name": "Braton",
				"masteryRank": "-1",
				"weaponClass": "-1",
				"maxRank": "-1",
				"slot": "-1",
				"acquisitionText": "-1",
				"acquisitionTable": [],
				"foundryCosts": [],
				"extracted": false,
			})
		);
	}

	#[test]
	fn absent_label_serializes_as_null() {
		let details = WeaponDetails {
			infobox: Infobox {
				mastery_rank: Some("-1".into()),
				..Default::default()
			},
			acquisition_text: NO_SOURCE.into(),
			..Default::default()
		};
		let json = serde_json::to_value(WeaponRecord::extracted("Lato", details)).unwrap();
		assert_eq!(json["masteryRank"], "-1");
		assert!(json["slot"].is_null());
		assert_eq!(json["extracted"], true);
	}

	#[test]
	fn foundry_costs_keep_first_position_on_reinsert() {
		let mut costs = FoundryCosts::new();
		costs.insert("Credits", 15000);
		costs.insert("Ferrite", 150);
		costs.insert("Credits", 20000);
		assert_eq!(costs.entries(), ["Credits: 20000", "Ferrite: 150"]);
		assert_eq!(costs.get("Credits"), Some(20000));
	}

	#[test]
	fn relic_columns_flatten_to_header_and_joined_descriptors() {
		let table = AcquisitionTable::Relics(vec![RelicColumn {
			header: "Blueprint".into(),
			relics: vec!["Axi A1 Common".into(), "Lith B2 Rare".into()],
		}]);
		assert_eq!(table.rows(), vec![vec!["Blueprint".to_string(), "Axi A1 Common,Lith B2 Rare".to_string()]]);
	}

	#[test]
	fn standing_exclusion_is_configurable() {
		let mut opts = ExtractOptions::default();
		assert!(opts.is_excluded_resource("Platinum"));
		assert!(opts.is_excluded_resource("Standing"));
		opts.exclude_standing = false;
		assert!(opts.is_excluded_resource("Platinum"));
		assert!(!opts.is_excluded_resource("Standing"));
	}
}
