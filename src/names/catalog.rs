//! Ethnicity and nickname catalogs.
//!
//! Both catalogs are read-only once built. They are usually loaded from
//! attribute tables (see `crate::tables`), one [`Record`] per entry:
//!
//! ```text
//! ethnicity: "Irish"   => "Order=Western Feminine=Bridget,Maeve Masculine=Liam Family=Byrne"
//! nickname:  "Bob"     => "Type=Short Long=Robert"
//! nickname:  "Coyote"  => "Type=Animal Move=Lopes,Slinks"
//! ```

use std::str::FromStr;

use indexmap::IndexMap;

use crate::codec::{Record, Table};
use crate::error::CatalogError;

// --- Gender -----------------------------------------------------------------

/// Which personal-name list a gender draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderCategory {
    Feminine,
    Masculine,
    Neutral,
}

impl GenderCategory {
    /// Map a host gender value onto a name list. Anything unrecognized,
    /// including no value at all, is `Neutral`.
    pub fn resolve(gender: Option<&str>) -> Self {
        let Some(gender) = gender else {
            return GenderCategory::Neutral;
        };
        match gender.trim().to_ascii_lowercase().as_str() {
            "feminine" | "female" | "f" | "woman" => GenderCategory::Feminine,
            "masculine" | "male" | "m" | "man" => GenderCategory::Masculine,
            _ => GenderCategory::Neutral,
        }
    }

    /// Attribute name of the matching list in an ethnicity record.
    pub fn attr(self) -> &'static str {
        match self {
            GenderCategory::Feminine => "Feminine",
            GenderCategory::Masculine => "Masculine",
            GenderCategory::Neutral => "Neutral",
        }
    }
}

/// A name list within an ethnicity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameList {
    Personal(GenderCategory),
    Family,
}

// --- Ethnicities ------------------------------------------------------------

/// Whether the family name comes after or before the personal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameOrder {
    /// `personal "epithet" family`
    #[default]
    Western,
    /// `"epithet" family personal`
    Eastern,
}

impl FromStr for NameOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Western" => Ok(NameOrder::Western),
            "Eastern" => Ok(NameOrder::Eastern),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ethnicity {
    pub name: String,
    pub feminine: Vec<String>,
    pub masculine: Vec<String>,
    pub neutral: Vec<String>,
    pub family: Vec<String>,
    pub order: NameOrder,
}

impl Ethnicity {
    /// An ethnicity with no names yet and `Western` order.
    pub fn new(name: impl Into<String>) -> Self {
        Ethnicity {
            name: name.into(),
            feminine: Vec::new(),
            masculine: Vec::new(),
            neutral: Vec::new(),
            family: Vec::new(),
            order: NameOrder::default(),
        }
    }

    pub fn with_names<I, S>(mut self, list: NameList, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = match list {
            NameList::Personal(GenderCategory::Feminine) => &mut self.feminine,
            NameList::Personal(GenderCategory::Masculine) => &mut self.masculine,
            NameList::Personal(GenderCategory::Neutral) => &mut self.neutral,
            NameList::Family => &mut self.family,
        };
        target.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_order(mut self, order: NameOrder) -> Self {
        self.order = order;
        self
    }

    pub fn list(&self, list: NameList) -> &[String] {
        match list {
            NameList::Personal(GenderCategory::Feminine) => &self.feminine,
            NameList::Personal(GenderCategory::Masculine) => &self.masculine,
            NameList::Personal(GenderCategory::Neutral) => &self.neutral,
            NameList::Family => &self.family,
        }
    }

    /// No catalog of personal or family names: names are built from
    /// descriptive words instead.
    pub fn is_descriptive(&self) -> bool {
        self.feminine.is_empty() && self.masculine.is_empty() && self.neutral.is_empty() && self.family.is_empty()
    }

    /// Build from an attribute record. Entries with any name list must
    /// declare `Order`.
    pub fn from_record(name: &str, record: &Record) -> Result<Self, CatalogError> {
        let mut ethnicity = Ethnicity::new(name)
            .with_names(NameList::Personal(GenderCategory::Feminine), record.values("Feminine"))
            .with_names(NameList::Personal(GenderCategory::Masculine), record.values("Masculine"))
            .with_names(NameList::Personal(GenderCategory::Neutral), record.values("Neutral"))
            .with_names(NameList::Family, record.values("Family"));

        match record.value("Order") {
            Some(order) => {
                ethnicity.order = order.parse().map_err(|_| CatalogError::InvalidValue {
                    entry: name.to_string(),
                    field: "Order",
                    value: order.clone(),
                })?;
            }
            None if !ethnicity.is_descriptive() => {
                return Err(CatalogError::MissingField { entry: name.to_string(), field: "Order" });
            }
            None => {}
        }

        Ok(ethnicity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EthnicityCatalog {
    entries: IndexMap<String, Ethnicity>,
}

impl EthnicityCatalog {
    pub fn new<I: IntoIterator<Item = Ethnicity>>(entries: I) -> Self {
        EthnicityCatalog { entries: entries.into_iter().map(|e| (e.name.clone(), e)).collect() }
    }

    pub fn from_table(table: &Table) -> Result<Self, CatalogError> {
        let entries = table
            .iter()
            .map(|(name, attrs)| Ethnicity::from_record(name, &Record::parse(attrs)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EthnicityCatalog::new(entries))
    }

    pub fn get(&self, name: &str) -> Option<&Ethnicity> {
        self.entries.get(name)
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ethnicity> {
        self.entries.values()
    }

    /// Entries that carry name lists (not descriptive).
    pub fn concrete(&self) -> Vec<&Ethnicity> {
        self.entries.values().filter(|e| !e.is_descriptive()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if some entry has a non-empty `list`; the fallback search only
    /// terminates when this holds.
    pub fn has_names_for(&self, list: NameList) -> bool {
        self.entries.values().any(|e| !e.list(list).is_empty())
    }
}

// --- Nicknames --------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NicknameType {
    Short,
    Adjective,
    Animal,
    Nature,
    Noun,
    Preposition,
    Verb,
}

impl NicknameType {
    pub fn kind(self) -> NicknameKinds {
        match self {
            NicknameType::Short => NicknameKinds::SHORT,
            NicknameType::Adjective => NicknameKinds::ADJECTIVE,
            NicknameType::Animal => NicknameKinds::ANIMAL,
            NicknameType::Nature => NicknameKinds::NATURE,
            NicknameType::Noun => NicknameKinds::NOUN,
            NicknameType::Preposition => NicknameKinds::PREPOSITION,
            NicknameType::Verb => NicknameKinds::VERB,
        }
    }
}

impl FromStr for NicknameType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Short" => NicknameType::Short,
            "Adjective" => NicknameType::Adjective,
            "Animal" => NicknameType::Animal,
            "Nature" => NicknameType::Nature,
            "Noun" => NicknameType::Noun,
            "Preposition" => NicknameType::Preposition,
            "Verb" => NicknameType::Verb,
            _ => return Err(()),
        })
    }
}

bitflags::bitflags! {
    /// A set of nickname types, used to select word pools.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NicknameKinds: u8 {
        const SHORT       = 1 << 0;
        const ADJECTIVE   = 1 << 1;
        const ANIMAL      = 1 << 2;
        const NATURE      = 1 << 3;
        const NOUN        = 1 << 4;
        const PREPOSITION = 1 << 5;
        const VERB        = 1 << 6;

        /// Words that can stand alone as an epithet noun.
        const EPITHET_NOUNS = Self::ANIMAL.bits() | Self::NATURE.bits() | Self::NOUN.bits();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameEntry {
    pub word: String,
    pub kind: NicknameType,
    /// Full names this short form abbreviates (`Short` only).
    pub long: Vec<String>,
    /// Movement verbs (`Animal` only).
    pub moves: Vec<String>,
}

impl NicknameEntry {
    pub fn new(word: impl Into<String>, kind: NicknameType) -> Self {
        NicknameEntry { word: word.into(), kind, long: Vec::new(), moves: Vec::new() }
    }

    pub fn with_long<I: IntoIterator<Item = S>, S: Into<String>>(mut self, long: I) -> Self {
        self.long.extend(long.into_iter().map(Into::into));
        self
    }

    pub fn with_moves<I: IntoIterator<Item = S>, S: Into<String>>(mut self, moves: I) -> Self {
        self.moves.extend(moves.into_iter().map(Into::into));
        self
    }

    pub fn from_record(word: &str, record: &Record) -> Result<Self, CatalogError> {
        let kind = record
            .value("Type")
            .ok_or_else(|| CatalogError::MissingField { entry: word.to_string(), field: "Type" })?;
        let kind = kind.parse().map_err(|_| CatalogError::InvalidValue {
            entry: word.to_string(),
            field: "Type",
            value: kind.clone(),
        })?;
        Ok(NicknameEntry::new(word, kind).with_long(record.values("Long")).with_moves(record.values("Move")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NicknameCatalog {
    entries: IndexMap<String, NicknameEntry>,
}

impl NicknameCatalog {
    pub fn new<I: IntoIterator<Item = NicknameEntry>>(entries: I) -> Self {
        NicknameCatalog { entries: entries.into_iter().map(|e| (e.word.clone(), e)).collect() }
    }

    pub fn from_table(table: &Table) -> Result<Self, CatalogError> {
        let entries = table
            .iter()
            .map(|(word, attrs)| NicknameEntry::from_record(word, &Record::parse(attrs)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NicknameCatalog::new(entries))
    }

    /// True if `word` is a catalog key of any type.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&NicknameEntry> {
        self.entries.get(word)
    }

    /// `Short` entries whose `Long` list names `full_name`, in catalog order.
    pub fn known_short_forms(&self, full_name: &str) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| e.kind == NicknameType::Short && e.long.iter().any(|l| l == full_name))
            .map(|e| e.word.as_str())
            .collect()
    }

    /// Entries whose type is in `kinds`, in catalog order.
    pub fn words(&self, kinds: NicknameKinds) -> Vec<&NicknameEntry> {
        self.entries.values().filter(|e| kinds.contains(e.kind.kind())).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
