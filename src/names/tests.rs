use rand::SeedableRng;
use rand::rngs::StdRng;

use super::random::scripted::Scripted;
use super::*;
use crate::Options;

fn frontier_words() -> NicknameCatalog {
    NicknameCatalog::new([
        NicknameEntry::new("Dick", NicknameType::Short).with_long(["Richard"]),
        NicknameEntry::new("Bob", NicknameType::Short).with_long(["Robert"]),
        NicknameEntry::new("Lucky", NicknameType::Adjective),
        NicknameEntry::new("Crooked", NicknameType::Adjective),
        NicknameEntry::new("Coyote", NicknameType::Animal).with_moves(["Lopes", "Slinks"]),
        NicknameEntry::new("Hawk", NicknameType::Animal),
        NicknameEntry::new("River", NicknameType::Nature),
        NicknameEntry::new("Mesa", NicknameType::Nature),
        NicknameEntry::new("Deuce", NicknameType::Noun),
        NicknameEntry::new("Beyond", NicknameType::Preposition),
        NicknameEntry::new("Under", NicknameType::Preposition),
        NicknameEntry::new("Sings", NicknameType::Verb),
    ])
}

fn no_epithet() -> Options {
    Options { epithet_odds: Odds::NEVER, ..Options::default() }
}

fn chinese() -> Ethnicity {
    Ethnicity::new("Chinese")
        .with_order(NameOrder::Eastern)
        .with_names(NameList::Family, ["Wang"])
        .with_names(NameList::Personal(GenderCategory::Masculine), ["Wei"])
}

#[test]
fn eastern_order_puts_family_first() {
    let catalog = EthnicityCatalog::new([chinese()]);
    let mut rng = StdRng::seed_from_u64(42);
    let got = generate_name(&catalog, &frontier_words(), "Chinese", Some("Masculine"), &mut rng, &no_epithet());
    assert_eq!(got.full_name, "Wang Wei");
    assert_eq!(got.order, NameOrder::Eastern);
    assert_eq!(got.epithet, None);
}

#[test]
fn western_order_with_epithet_between() {
    let irish = Ethnicity::new("Irish")
        .with_order(NameOrder::Western)
        .with_names(NameList::Personal(GenderCategory::Feminine), ["Maeve"])
        .with_names(NameList::Family, ["Byrne"]);
    let catalog = EthnicityCatalog::new([irish]);
    let always = Options { epithet_odds: Odds::ALWAYS, nickname_epithets: false };

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let got = generate_name(&catalog, &frontier_words(), "Irish", Some("female"), &mut rng, &always);
        let epithet = got.epithet.clone().expect("epithet always attached");
        assert_eq!(got.full_name, format!("Maeve \"{epithet}\" Byrne"));
    }
}

#[test]
fn empty_neutral_list_falls_back_to_another_ethnicity() {
    let german = Ethnicity::new("German")
        .with_order(NameOrder::Western)
        .with_names(NameList::Personal(GenderCategory::Feminine), ["Greta"])
        .with_names(NameList::Personal(GenderCategory::Masculine), ["Hans"])
        .with_names(NameList::Family, ["Vogel"]);
    let frontier = Ethnicity::new("Frontier")
        .with_order(NameOrder::Western)
        .with_names(NameList::Personal(GenderCategory::Neutral), ["Sage", "Avery"])
        .with_names(NameList::Family, ["Hart"]);
    let catalog = EthnicityCatalog::new([german, frontier]);

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let got = generate_name(&catalog, &frontier_words(), "German", Some("Agender"), &mut rng, &no_epithet());
        assert_eq!(got.category, GenderCategory::Neutral);
        assert_eq!(got.personal_from, "Frontier");
        assert!(["Sage", "Avery"].contains(&got.personal.as_str()), "{got:?}");
        assert_eq!(got.family, "Vogel");
        assert_eq!(got.full_name, format!("{} Vogel", got.personal));
    }
}

#[test]
fn unknown_ethnicity_borrows_a_concrete_one() {
    let catalog = EthnicityCatalog::new([chinese(), Ethnicity::new("Native American")]);
    let mut rng = StdRng::seed_from_u64(5);
    let got = generate_name(&catalog, &frontier_words(), "Martian", Some("male"), &mut rng, &no_epithet());
    assert_eq!(got.ethnicity, "Chinese");
    assert_eq!(got.full_name, "Wang Wei");
}

/// True if `name` fits `<Adjective> <Animal>` or
/// `[<Animal> Who ]<Verb> <Preposition> <Nature>` for `words`.
fn fits_descriptive_template(name: &str, words: &NicknameCatalog) -> bool {
    let is = |w: &str, kinds: NicknameKinds| words.get(w).is_some_and(|e| kinds.contains(e.kind.kind()));
    let moves = |w: &str| words.words(NicknameKinds::ANIMAL).iter().any(|a| a.moves.iter().any(|m| m == w));
    let parts: Vec<&str> = name.split(' ').collect();
    match parts.as_slice() {
        &[adj, animal] => is(adj, NicknameKinds::ADJECTIVE) && is(animal, NicknameKinds::ANIMAL),
        &[verb, prep, nature] => {
            is(verb, NicknameKinds::VERB) && is(prep, NicknameKinds::PREPOSITION) && is(nature, NicknameKinds::NATURE)
        }
        &[animal, "Who", verb, prep, nature] => {
            is(animal, NicknameKinds::ANIMAL)
                && (is(verb, NicknameKinds::VERB) || moves(verb))
                && is(prep, NicknameKinds::PREPOSITION)
                && is(nature, NicknameKinds::NATURE)
        }
        _ => false,
    }
}

#[test]
fn descriptive_names_fit_a_template() {
    let words = frontier_words();
    let catalog = EthnicityCatalog::new([Ethnicity::new("Native American")]);
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let got = generate_name(&catalog, &words, "Native American", Some("female"), &mut rng, &Options::default());
        assert!(got.descriptive);
        assert!(!got.full_name.is_empty());
        assert!(fits_descriptive_template(&got.full_name, &words), "{}", got.full_name);
    }
}

#[test]
fn animal_who_prefers_its_own_moves() {
    // coin false (template 2), coin true (animal), animal 0 = Coyote, move 1 = Slinks,
    // preposition 0, nature 1.
    let mut rng = Scripted::new(&[1, 0, 0, 1, 0, 1]);
    assert_eq!(descriptive_name(&frontier_words(), &mut rng), "Coyote Who Slinks Beyond Mesa");
}

#[test]
fn descriptive_name_survives_an_empty_word_catalog() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        assert!(!descriptive_name(&NicknameCatalog::default(), &mut rng).is_empty());
    }
}

#[test]
fn nickname_epithet_uses_known_short_form() {
    let ethnicity = Ethnicity::new("American")
        .with_order(NameOrder::Western)
        .with_names(NameList::Personal(GenderCategory::Masculine), ["Richard"])
        .with_names(NameList::Family, ["Cole"]);
    let catalog = EthnicityCatalog::new([ethnicity]);
    // personal 0; epithet odds hit; nickname coin (y-suffix) x2; nickname coin hit;
    // adjective 1 = Crooked; nickname 0 = Dick; family 0.
    let mut rng = Scripted::new(&[0, 0, 0, 0, 0, 1, 0, 0]);
    let options = Options { epithet_odds: Odds::ALWAYS, nickname_epithets: true };
    let got = generate_name(&catalog, &frontier_words(), "American", Some("male"), &mut rng, &options);
    assert_eq!(got.full_name, "Richard \"Crooked Dick\" Cole");
}

#[test]
fn epithet_rate_is_about_two_thirds() {
    let catalog = EthnicityCatalog::new([chinese()]);
    let words = frontier_words();
    let mut rng = StdRng::seed_from_u64(1234);
    let with = (0..3000)
        .filter(|_| {
            generate_name(&catalog, &words, "Chinese", Some("male"), &mut rng, &Options::default()).epithet.is_some()
        })
        .count();
    assert!((1800..2200).contains(&with), "{with} of 3000 had an epithet");
}

#[test]
fn known_nicknames_always_returned() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..10 {
        assert!(nicknames("Richard", &frontier_words(), &mut rng).contains(&"Dick".to_string()));
    }
}

#[test]
fn phonetic_nickname_without_catalog_entry() {
    let words = NicknameCatalog::new([NicknameEntry::new("Dick", NicknameType::Short).with_long(["Richard"])]);
    let got = nicknames("Robert", &words, &mut StdRng::seed_from_u64(0));
    assert!(got.contains(&"Rob".to_string()), "{got:?}");
}
