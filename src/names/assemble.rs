//! Full-name assembly.
//!
//! ```text
//! ethnicity ──┬─ descriptive ──▶ "Swift Coyote" | "[Coyote Who ]Lopes Beyond River"
//!             └─ concrete
//!                  │ gender ─▶ Feminine | Masculine | Neutral
//!                  ├─ personal  (fallback: another ethnicity's list)
//!                  ├─ epithet   (odds; adjective+nickname | adjective+noun | noun)
//!                  ├─ family    (fallback: another ethnicity's list)
//!                  ▼
//!        Western: personal "epithet" family
//!        Eastern: "epithet" family personal
//! ```

use crate::Options;
use crate::names::catalog::{
    Ethnicity, EthnicityCatalog, GenderCategory, NameList, NameOrder, NicknameCatalog, NicknameEntry, NicknameKinds,
};
use crate::names::nickname::nicknames;
use crate::names::random::{RandomSource, pick};

/// Stand-in for a descriptive word when the nickname catalog has none of the
/// needed type.
const MISSING_WORD: &str = "Stranger";

/// Everything decided while generating one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDetails {
    /// The assembled display name.
    pub full_name: String,
    /// Ethnicity the name was generated for (the substitute, when the
    /// requested one was unknown).
    pub ethnicity: String,
    pub category: GenderCategory,
    pub order: NameOrder,
    /// True for names built from descriptive words.
    pub descriptive: bool,
    pub personal: String,
    pub epithet: Option<String>,
    pub family: String,
    /// Ethnicity whose list supplied the personal name.
    pub personal_from: String,
    /// Ethnicity whose list supplied the family name.
    pub family_from: String,
}

/// Generate a display name for `ethnicity` and `gender`.
///
/// Never fails: an unknown ethnicity is replaced by a random concrete one, and
/// an empty name list by another ethnicity's list.
pub fn generate_name(
    ethnicities: &EthnicityCatalog,
    nicks: &NicknameCatalog,
    ethnicity: &str,
    gender: Option<&str>,
    rng: &mut dyn RandomSource,
    options: &Options,
) -> NameDetails {
    let category = GenderCategory::resolve(gender);

    let resolved = match ethnicities.get(ethnicity) {
        Some(e) => Some(e),
        None => {
            let substitute = pick(rng, &ethnicities.concrete()).copied();
            tracing::debug!(
                requested = ethnicity,
                substitute = substitute.map(|e| e.name.as_str()),
                "unknown ethnicity"
            );
            substitute
        }
    };

    let eth = match resolved {
        Some(e) if !e.is_descriptive() => e,
        other => {
            let full_name = descriptive_name(nicks, rng);
            let name = other.map_or(ethnicity, |e| e.name.as_str()).to_string();
            return NameDetails {
                full_name,
                ethnicity: name,
                category,
                order: NameOrder::Western,
                descriptive: true,
                personal: String::new(),
                epithet: None,
                family: String::new(),
                personal_from: String::new(),
                family_from: String::new(),
            };
        }
    };

    let (personal_from, personal) = pick_name(ethnicities, eth, NameList::Personal(category), rng);
    let epithet = epithet(&personal, eth.order, nicks, rng, options);
    let (family_from, family) = pick_name(ethnicities, eth, NameList::Family, rng);

    let quoted = epithet.as_ref().map(|e| format!("\"{e}\" ")).unwrap_or_default();
    let full_name = match eth.order {
        NameOrder::Eastern => format!("{quoted}{family} {personal}"),
        NameOrder::Western => format!("{personal} {quoted}{family}"),
    };

    NameDetails {
        full_name: full_name.trim().to_string(),
        ethnicity: eth.name.clone(),
        category,
        order: eth.order,
        descriptive: false,
        personal,
        epithet,
        family,
        personal_from,
        family_from,
    }
}

/// Pick a name from `eth`'s `list`, or from a random ethnicity that has one
/// when `eth`'s is empty. Returns the supplying ethnicity and the name; both
/// empty if no ethnicity in the catalog has the list.
fn pick_name(
    ethnicities: &EthnicityCatalog,
    eth: &Ethnicity,
    list: NameList,
    rng: &mut dyn RandomSource,
) -> (String, String) {
    let source = if !eth.list(list).is_empty() {
        Some(eth)
    } else {
        let donors: Vec<&Ethnicity> = ethnicities.iter().filter(|e| !e.list(list).is_empty()).collect();
        let donor = pick(rng, &donors).copied();
        tracing::debug!(ethnicity = %eth.name, ?list, donor = donor.map(|e| e.name.as_str()), "empty name list");
        donor
    };

    source
        .and_then(|e| pick(rng, e.list(list)).map(|n| (e.name.clone(), n.clone())))
        .unwrap_or_default()
}

/// Maybe build an epithet (without quotes) for `personal`.
fn epithet(
    personal: &str,
    order: NameOrder,
    nicks: &NicknameCatalog,
    rng: &mut dyn RandomSource,
    options: &Options,
) -> Option<String> {
    if !rng.chance(options.epithet_odds) {
        return None;
    }

    let adjectives = nicks.words(NicknameKinds::ADJECTIVE);
    let nouns = nicks.words(NicknameKinds::EPITHET_NOUNS);

    // The phonetic rules are English; an Eastern-order name gets no nickname epithet.
    let nickname_forms = if options.nickname_epithets && order == NameOrder::Western && !personal.is_empty() {
        nicknames(personal, nicks, rng)
    } else {
        Vec::new()
    };

    if !nickname_forms.is_empty() && rng.coin() {
        if let (Some(adjective), Some(nickname)) = (pick(rng, &adjectives), pick(rng, &nickname_forms)) {
            return Some(format!("{} {nickname}", adjective.word));
        }
    }

    let noun = pick(rng, &nouns)?;
    if rng.coin() {
        if let Some(adjective) = pick(rng, &adjectives) {
            return Some(format!("{} {}", adjective.word, noun.word));
        }
    }
    Some(noun.word.clone())
}

/// A name built from descriptive words, one of:
///
/// - `<Adjective> <Animal>`
/// - `[<Animal> Who ]<Verb> <Preposition> <Nature>`, where an animal's own
///   `Move` verbs are preferred when it has any.
pub fn descriptive_name(nicks: &NicknameCatalog, rng: &mut dyn RandomSource) -> String {
    let animals = nicks.words(NicknameKinds::ANIMAL);

    if rng.coin() {
        let adjectives = nicks.words(NicknameKinds::ADJECTIVE);
        return format!("{} {}", word(rng, &adjectives), word(rng, &animals));
    }

    let animal = if rng.coin() { pick(rng, &animals).copied() } else { None };
    let verbs = nicks.words(NicknameKinds::VERB);
    let verb = match animal.filter(|a| !a.moves.is_empty()) {
        Some(a) => pick(rng, &a.moves).cloned().unwrap_or_default(),
        None => word(rng, &verbs),
    };
    let preposition = word(rng, &nicks.words(NicknameKinds::PREPOSITION));
    let nature = word(rng, &nicks.words(NicknameKinds::NATURE));

    let who = animal.map(|a| format!("{} Who ", a.word)).unwrap_or_default();
    format!("{who}{verb} {preposition} {nature}")
}

fn word(rng: &mut dyn RandomSource, pool: &[&NicknameEntry]) -> String {
    pick(rng, pool).map_or_else(|| MISSING_WORD.to_string(), |e| e.word.clone())
}
