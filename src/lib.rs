//! Frontier rule-data toolkit.
//!
//! Two independent pieces:
//!
//! - [`codec`]: the attribute-string mini-language every rule table is written
//!   in (`Key=Value,Value "Quoted Value"`), plus deriving one table from
//!   another by merge, override and delete.
//! - [`names`]: the weird-west name generator. Nicknames, full names with
//!   epithets, and descriptive tribal names.
//!
//! The functions re-exported at the crate root work over the embedded
//! [`tables`]; the modules take explicit catalogs and random sources.

#[macro_use]
mod macros;
mod api;
pub mod codec;
mod error;
pub mod names;
pub mod tables;

pub use api::{
    NameReport, NicknameTrace, Options, ethnicities, ethnicity_catalog, nickname_catalog, nicknames,
    nicknames_verbose_with, nicknames_with, random_name, random_name_verbose_with, random_name_with,
    randomize_one_attribute,
};
pub use codec::{Record, Table, TableEdit, build_table, extend_table, parse_value, parse_value_list};
pub use error::CatalogError;
pub use names::{NameDetails, Odds, RandomSource};

