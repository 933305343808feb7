//! Embedded rule-data tables.
//!
//! The tables are plain attribute strings, exactly as a plugin would declare
//! them, and are only turned into catalogs on first use.

#[path = "tables/ethnicities.rs"]
mod ethnicities;
#[path = "tables/nicknames.rs"]
mod nicknames;

use once_cell::sync::Lazy;

use crate::codec::{Table, build_table, extend_table, table_from};
use crate::error::CatalogError;
use crate::names::{EthnicityCatalog, NicknameCatalog};

/// Frontier ethnicity table: the base table with frontier edits and
/// extensions applied.
pub static ETHNICITY_TABLE: Lazy<Table> = Lazy::new(|| {
    let base = table_from(ethnicities::BASE);
    let edited = build_table(&base, ethnicities::frontier_edits());
    extend_table(&edited, ethnicities::EXTENSIONS.iter().copied())
});

pub static NICKNAME_TABLE: Lazy<Table> = Lazy::new(|| table_from(nicknames::NICKNAMES));

pub fn ethnicity_catalog() -> Result<EthnicityCatalog, CatalogError> {
    EthnicityCatalog::from_table(&ETHNICITY_TABLE)
}

pub fn nickname_catalog() -> Result<NicknameCatalog, CatalogError> {
    NicknameCatalog::from_table(&NICKNAME_TABLE)
}
