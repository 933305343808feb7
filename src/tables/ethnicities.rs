//! Ethnicity name tables.
//!
//! `BASE` is the generic settler table; the frontier table is derived from it
//! by [`frontier_edits`] (replace/add/remove whole entries) followed by
//! `EXTENSIONS` (append extra names to surviving entries).

use crate::codec::TableEdit;

pub(crate) const BASE: &[(&str, &str)] = &[
    (
        "American",
        "Order=Western \
         Feminine=Abigail,Charlotte,Eliza,Hannah,Martha,Mary,Rebecca,Sarah \
         Masculine=Benjamin,Daniel,Ezekiel,James,John,Robert,Samuel,William \
         Neutral=Carey,Jesse,Lee,Marion,Shelby \
         Family=Adams,Baker,Carter,Cole,Harris,Miller,Parker,Walker",
    ),
    (
        "English",
        "Order=Western \
         Feminine=Alice,Elizabeth,Emma,Florence,Harriet,Margaret,Victoria \
         Masculine=Albert,Arthur,Charles,Edward,George,Henry,Richard,Thomas \
         Neutral=Ashley,Beverly,Evelyn,Leslie \
         Family=Bennett,Clarke,Fletcher,Hughes,Turner,Wright",
    ),
    (
        "French",
        "Order=Western \
         Feminine=Adele,Camille,Colette,Josephine,Madeleine,Marguerite \
         Masculine=Antoine,Etienne,Henri,Jacques,Louis,Pierre \
         Family=Bernard,Dubois,Fontaine,Girard,Laurent,Moreau",
    ),
    (
        "German",
        "Order=Western \
         Feminine=Anna,Greta,Hedwig,Ingrid,Liesel,Margarethe \
         Masculine=Friedrich,Heinrich,Johann,Karl,Otto,Wilhelm \
         Family=Becker,Fischer,Hoffmann,Richter,Schmidt,Vogel,Weber",
    ),
    (
        "Irish",
        "Order=Western \
         Feminine=Bridget,Kathleen,Maeve,Maureen,Nora,Siobhan \
         Masculine=Brendan,Cormac,Declan,Liam,Patrick,Seamus \
         Family=Byrne,Doyle,Flanagan,Kelly,Murphy,O'Brien,Walsh",
    ),
    (
        "Italian",
        "Order=Western \
         Feminine=Francesca,Giulia,Lucia,Maria,Rosa \
         Masculine=Antonio,Giovanni,Giuseppe,Luigi,Salvatore \
         Family=Bianchi,Esposito,Ferrari,Ricci,Romano,Russo",
    ),
    (
        "Norse",
        "Order=Western \
         Feminine=Astrid,Freya,Gudrun,Sigrid \
         Masculine=Bjorn,Leif,Ragnar,Sven \
         Family=Eriksson,Larsen,Olsen",
    ),
    (
        "Scottish",
        "Order=Western \
         Feminine=Ailsa,Fiona,Isla,Morag,Rhona \
         Masculine=Angus,Callum,Duncan,Hamish,Malcolm \
         Family=Campbell,Fraser,MacLeod,Murray,Stewart",
    ),
];

/// Whole-entry changes that turn `BASE` into the frontier table.
pub(crate) fn frontier_edits() -> Vec<(&'static str, TableEdit)> {
    vec![
        (
            "Chinese",
            TableEdit::Set(
                "Order=Eastern \
                 Feminine=Ling,Mei,Xiu,Yan,Hua \
                 Masculine=Chen,Jian,Ming,Wei,Zhi \
                 Family=Chang,Chow,Lee,Li,Wang,Wong,Zhang"
                    .to_string(),
            ),
        ),
        (
            "Mexican",
            TableEdit::Set(
                "Order=Western \
                 Feminine=Carmen,Dolores,Guadalupe,Inez,Josefina,Rosario \
                 Masculine=Diego,Esteban,Joaquin,Miguel,Rafael,Tomas \
                 Family=Castillo,Garcia,Hernandez,Morales,Ortega,Vasquez"
                    .to_string(),
            ),
        ),
        // No catalog of personal or family names: descriptive names.
        ("Native American", TableEdit::Set(String::new())),
        ("Norse", TableEdit::Delete),
    ]
}

/// Extra names appended to frontier entries.
pub(crate) const EXTENSIONS: &[(&str, &str)] = &[
    (
        "American",
        "Feminine=Clementine,Prudence \
         Masculine=Jebediah,Lemuel,Wyatt \
         Neutral=Dakota,Shannon",
    ),
    ("Irish", "Family=\"O'Malley\",Quinn"),
    ("Mexican", ""),
];
