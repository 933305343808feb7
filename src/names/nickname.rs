//! Nickname derivation.
//!
//! Informal names come from two places:
//!
//! 1. **The catalog.** Irregular short forms (`Dick` for Richard, `Peggy` for
//!    Margaret) cannot be computed and are listed as `Short` entries whose
//!    `Long` list names the full forms. They are always returned.
//! 2. **Phonetics.** A heuristic clips the leading syllable and builds
//!    diminutives from it, English style (`Robert` → `Rob`, `Robbie`).
//!
//! ```text
//! "Richard" ── catalog ──────────────▶ Dick, Rick
//!           ── stem  "Rich" ─────────▶ Rich
//!              ├─ 2 trailing consonants ─▶ Richie | Richy   (diminutive)
//!              │                       └─▶ Ric              (shortened)
//!              └─ no final vowel ───────▶ Riccie | Riccy    (doubled)
//! ```
//!
//! The heuristic is lossy on purpose: odd candidates are acceptable, and the
//! only randomness is the `y`/`ie` choice for diminutives.

use crate::names::catalog::NicknameCatalog;
use crate::names::random::RandomSource;

/// Endings that already make a full name a diminutive of its stem.
const DIMINUTIVE_ENDINGS: &[&str] = &["y", "ey", "ie", "ee", "e", "i"];

/// Which step of the derivation produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NicknameStep {
    /// Listed in the catalog as a short form of the full name.
    Catalog,
    /// Leading syllable of the full name.
    Stem,
    /// Stem plus `y`/`ie`.
    Diminutive,
    /// Stem with its trailing consonant cluster cut to one letter.
    Shortened,
    /// Stem with its final consonant doubled plus `y`/`ie`.
    Doubled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub nickname: String,
    pub step: NicknameStep,
}

/// Plausible nicknames for `full_name`: catalog short forms first, then
/// phonetic derivations in the order computed.
pub fn nicknames(full_name: &str, catalog: &NicknameCatalog, rng: &mut dyn RandomSource) -> Vec<String> {
    derive(full_name, catalog, rng).into_iter().map(|d| d.nickname).collect()
}

/// Same as [`nicknames`], keeping the step that produced each candidate.
pub fn derive(full_name: &str, catalog: &NicknameCatalog, rng: &mut dyn RandomSource) -> Vec<Derivation> {
    let mut out: Vec<Derivation> = catalog
        .known_short_forms(full_name)
        .into_iter()
        .map(|n| Derivation { nickname: n.to_string(), step: NicknameStep::Catalog })
        .collect();

    let Some(mut nicked) = stem(full_name) else {
        tracing::debug!(full_name, "no syllable stem; catalog forms only");
        return out;
    };

    let push = |out: &mut Vec<Derivation>, nickname: String, step: NicknameStep| {
        if !catalog.contains(&nickname) && !out.iter().any(|d| d.nickname == nickname) {
            out.push(Derivation { nickname, step });
        }
    };

    if nicked != full_name && Some(nicked.as_str()) != full_name.strip_suffix('e') {
        push(&mut out, nicked.clone(), NicknameStep::Stem);
    }

    if ends_in_consonant_pair(&nicked) {
        if !is_diminutive_of(full_name, &nicked) {
            let diminutive = format!("{nicked}{}", diminutive_ending(rng));
            push(&mut out, diminutive, NicknameStep::Diminutive);
        }
        nicked = shorten(&nicked);
        push(&mut out, nicked.clone(), NicknameStep::Shortened);
    }

    if let Some(last) = nicked.chars().last().filter(|c| !is_vowel(*c)) {
        let doubled = format!("{nicked}{}", last.to_ascii_lowercase());
        if !is_diminutive_of(full_name, &nicked) && !full_name.starts_with(&doubled) {
            let diminutive = format!("{doubled}{}", diminutive_ending(rng));
            push(&mut out, diminutive, NicknameStep::Doubled);
        }
    }

    tracing::debug!(full_name, stem = %nicked, derived = out.len(), "nicknames");
    out
}

/// Leading syllable of `name` with an awkward trailing cluster trimmed, or
/// `None` if the name has no vowel-then-consonant run.
pub(crate) fn stem(name: &str) -> Option<String> {
    let re = regex!(r"(?i)^(?:y[aeiou]+|[^aeiouy]*[aeiouy]+)[^aeiouy]+");
    let mut nicked = re.find(name)?.as_str().to_string();

    let tail: Vec<char> = nicked.chars().rev().take(2).collect();
    if let &[last, prev] = tail.as_slice() {
        if is_consonant(prev) && trims_after(prev.to_ascii_lowercase(), last.to_ascii_lowercase()) {
            nicked.pop();
        }
    }
    Some(nicked)
}

/// Final letters that read badly at the end of a clipped name, given the
/// consonant before them. `ng` and the digraphs `ch sh th ph` are kept.
fn trims_after(prev: char, last: char) -> bool {
    match last {
        'r' | 'w' | 'q' | 'l' => true,
        'g' => prev != 'n',
        'h' => !matches!(prev, 'c' | 's' | 't' | 'p'),
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

fn ends_in_consonant_pair(s: &str) -> bool {
    let mut rev = s.chars().rev();
    matches!((rev.next(), rev.next()), (Some(a), Some(b)) if !is_vowel(a) && !is_vowel(b))
}

fn is_diminutive_of(full_name: &str, nicked: &str) -> bool {
    full_name
        .strip_prefix(nicked)
        .is_some_and(|rest| DIMINUTIVE_ENDINGS.contains(&rest))
}

/// Cut the trailing consonant run of `s` down to its first letter.
fn shorten(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let run_start = chars.iter().rposition(|c| is_vowel(*c)).map_or(0, |i| i + 1);
    chars[..(run_start + 1).min(chars.len())].iter().collect()
}

fn diminutive_ending(rng: &mut dyn RandomSource) -> &'static str {
    if rng.coin() { "y" } else { "ie" }
}
