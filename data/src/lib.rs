//! Turns Warframe wiki weapon pages into a structured catalog.
//!
//! [`Catalog::assemble`] walks a name list, fetches each page through a [`PageSource`]
//! and runs the extractors in [`extract`] over it. A weapon whose page can't be fetched
//! or read becomes a sentinel record; the batch never aborts.

mod error;
pub use error::{Error, Result};

mod structs;
pub use structs::*;

pub mod extract;

mod wiki;
pub use wiki::{DEFAULT_TIMEOUT, LIST_WIKI_URL, PageSource, WIKI_URL, WikiClient};

mod catalog;
pub use catalog::{Catalog, parse_name_list};

pub mod lists;
