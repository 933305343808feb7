//! Procedural name and nickname generation.
//!
//! This is the weird-west plugin's `name` randomizer, split into focused
//! submodules under `src/names/`:
//!
//! - `catalog.rs`: ethnicity and nickname catalogs, loaded from attribute
//!   tables through the codec.
//! - `nickname.rs`: known + phonetic nickname derivation.
//! - `assemble.rs`: full display names (personal, epithet, family) and
//!   descriptive names.
//! - `random.rs`: the `RandomSource` seam every random choice goes through.
//!
//! All functions take the catalogs by reference and never mutate them, so a
//! single pair of catalogs can serve any number of callers.

#[path = "names/assemble.rs"]
mod assemble;
#[path = "names/catalog.rs"]
mod catalog;
#[path = "names/nickname.rs"]
mod nickname;
#[path = "names/random.rs"]
mod random;

#[cfg(test)]
#[path = "names/tests.rs"]
mod tests;

pub use assemble::{NameDetails, descriptive_name, generate_name};
pub use catalog::{
    Ethnicity, EthnicityCatalog, GenderCategory, NameList, NameOrder, NicknameCatalog, NicknameEntry, NicknameKinds,
    NicknameType,
};
pub use nickname::{Derivation, NicknameStep, derive, nicknames};
pub use random::{Odds, RandomSource};
