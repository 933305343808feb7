use std::collections::HashMap;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::names::{self, Derivation, EthnicityCatalog, NameDetails, NicknameCatalog, Odds, RandomSource};
use crate::tables;

static DEFAULT_ETHNICITIES: Lazy<EthnicityCatalog> =
    Lazy::new(|| tables::ethnicity_catalog().expect("embedded ethnicity table is valid"));
static DEFAULT_NICKNAMES: Lazy<NicknameCatalog> =
    Lazy::new(|| tables::nickname_catalog().expect("embedded nickname table is valid"));

/// Options that affect name generation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Chance that a generated name carries a quoted epithet.
    pub epithet_odds: Odds,
    /// Allow epithets built from the personal name's nickname
    /// (`Richard "Crooked Dick" Cole`).
    pub nickname_epithets: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { epithet_odds: Odds::new(2, 3), nickname_epithets: true }
    }
}

/// The default (embedded) ethnicity catalog.
pub fn ethnicity_catalog() -> &'static EthnicityCatalog {
    &DEFAULT_ETHNICITIES
}

/// The default (embedded) nickname catalog.
pub fn nickname_catalog() -> &'static NicknameCatalog {
    &DEFAULT_NICKNAMES
}

/// Ethnicity names in the default catalog, in table order.
pub fn ethnicities() -> Vec<&'static str> {
    DEFAULT_ETHNICITIES.names().collect()
}

/// Nicknames for `full_name` from the default catalog.
///
/// # Example
/// ```
/// use quilvyn_frontier::nicknames;
///
/// assert!(nicknames("Richard").contains(&"Dick".to_string()));
/// ```
pub fn nicknames(full_name: &str) -> Vec<String> {
    nicknames_with(full_name, &mut rand::thread_rng())
}

/// Nicknames for `full_name` from the default catalog, drawing the
/// diminutive-suffix choice from `rng`.
pub fn nicknames_with(full_name: &str, rng: &mut dyn RandomSource) -> Vec<String> {
    names::nicknames(full_name, &DEFAULT_NICKNAMES, rng)
}

/// Result of [`nicknames_verbose_with`].
#[derive(Debug, Clone)]
pub struct NicknameTrace {
    pub full_name: String,
    /// Every candidate with the step that produced it.
    pub derivations: Vec<Derivation>,
    pub elapsed: Duration,
}

/// Like [`nicknames_with`], keeping the derivation step of each candidate.
pub fn nicknames_verbose_with(full_name: &str, rng: &mut dyn RandomSource) -> NicknameTrace {
    let start = Instant::now();
    let derivations = names::derive(full_name, &DEFAULT_NICKNAMES, rng);
    NicknameTrace { full_name: full_name.to_string(), derivations, elapsed: start.elapsed() }
}

/// Random display name for `ethnicity` and `gender` using the default
/// catalogs and [`Options`].
///
/// # Example
/// ```
/// use quilvyn_frontier::random_name;
///
/// let name = random_name("Chinese", Some("female"));
/// assert!(!name.is_empty());
/// ```
pub fn random_name(ethnicity: &str, gender: Option<&str>) -> String {
    random_name_with(ethnicity, gender, &mut rand::thread_rng(), &Options::default())
}

pub fn random_name_with(ethnicity: &str, gender: Option<&str>, rng: &mut dyn RandomSource, options: &Options) -> String {
    random_name_verbose_with(ethnicity, gender, rng, options).details.full_name
}

/// Result of [`random_name_verbose_with`].
#[derive(Debug, Clone)]
pub struct NameReport {
    pub details: NameDetails,
    pub elapsed: Duration,
}

/// Like [`random_name_with`], keeping every decision made along the way.
pub fn random_name_verbose_with(
    ethnicity: &str,
    gender: Option<&str>,
    rng: &mut dyn RandomSource,
    options: &Options,
) -> NameReport {
    let start = Instant::now();
    let details = names::generate_name(&DEFAULT_ETHNICITIES, &DEFAULT_NICKNAMES, ethnicity, gender, rng, options);
    NameReport { details, elapsed: start.elapsed() }
}

/// Randomize one character attribute, the way the host asks a plugin to.
///
/// - `"ethnicity"`: a random ethnicity from the default catalog.
/// - `"name"`: a name for the character's `ethnicity` (randomized first
///   when absent) and `gender`.
///
/// Returns false, leaving `attributes` untouched, for any other attribute.
pub fn randomize_one_attribute(
    attributes: &mut HashMap<String, String>,
    attribute: &str,
    rng: &mut dyn RandomSource,
    options: &Options,
) -> bool {
    match attribute {
        "ethnicity" => {
            let choices = ethnicities();
            if choices.is_empty() {
                return false;
            }
            let choice = choices[rng.index(choices.len())];
            attributes.insert("ethnicity".to_string(), choice.to_string());
            true
        }
        "name" => {
            if !attributes.contains_key("ethnicity") {
                randomize_one_attribute(attributes, "ethnicity", rng, options);
            }
            let ethnicity = attributes.get("ethnicity").cloned().unwrap_or_default();
            let gender = attributes.get("gender").map(String::as_str);
            let name = random_name_with(&ethnicity, gender, rng, options);
            attributes.insert("name".to_string(), name);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NicknameStep;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_nicknames_include_catalog_and_phonetic_forms() {
        let got = nicknames_with("Robert", &mut StdRng::seed_from_u64(1));
        assert_eq!(got[0], "Bob");
        assert!(got.contains(&"Rob".to_string()));
    }

    #[test]
    fn verbose_trace_attributes_steps() {
        let trace = nicknames_verbose_with("Richard", &mut StdRng::seed_from_u64(1));
        assert_eq!(trace.full_name, "Richard");
        assert_eq!(trace.derivations[0].nickname, "Dick");
        assert_eq!(trace.derivations[0].step, NicknameStep::Catalog);
        assert!(trace.derivations.iter().any(|d| d.step == NicknameStep::Shortened));
        assert!(trace.elapsed >= Duration::ZERO);
    }

    #[test]
    fn every_default_ethnicity_names_every_gender() {
        let mut rng = StdRng::seed_from_u64(99);
        for ethnicity in ethnicities() {
            for gender in [Some("female"), Some("male"), Some("other"), None] {
                let report = random_name_verbose_with(ethnicity, gender, &mut rng, &Options::default());
                let name = &report.details.full_name;
                assert!(!name.trim().is_empty(), "{ethnicity} {gender:?}");
                if !report.details.descriptive {
                    assert!(!report.details.personal.is_empty());
                    assert!(!report.details.family.is_empty());
                    assert!(name.contains(&report.details.personal) && name.contains(&report.details.family));
                }
            }
        }
    }

    #[test]
    fn randomize_name_fills_ethnicity_first() {
        let mut attrs = HashMap::from([("gender".to_string(), "female".to_string())]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(randomize_one_attribute(&mut attrs, "name", &mut rng, &Options::default()));
        assert!(ethnicities().contains(&attrs["ethnicity"].as_str()));
        assert!(!attrs["name"].is_empty());
    }

    #[test]
    fn randomize_name_keeps_given_ethnicity() {
        let mut attrs = HashMap::from([("ethnicity".to_string(), "Chinese".to_string())]);
        let options = Options { epithet_odds: Odds::NEVER, ..Options::default() };
        let mut rng = StdRng::seed_from_u64(8);
        assert!(randomize_one_attribute(&mut attrs, "name", &mut rng, &options));
        assert_eq!(attrs["ethnicity"], "Chinese");
        let family = attrs["name"].split(' ').next().unwrap().to_string();
        assert!(ethnicity_catalog().get("Chinese").unwrap().family.contains(&family));
    }

    #[test]
    fn randomize_other_attribute_is_a_noop() {
        let mut attrs = HashMap::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!randomize_one_attribute(&mut attrs, "strength", &mut rng, &Options::default()));
        assert!(attrs.is_empty());
    }
}
