//! Deriving one attribute table from another.
//!
//! Rule plugins rarely start from scratch: a setting's ethnicity or edge table
//! is a base table with some entries replaced, some removed and some extended.
//! Two pure functions cover that:
//!
//! ```text
//! build_table(base, edits)        base ∪ edits, edit wins, Delete removes
//! extend_table(base, extensions)  base[k] + " " + ext  (empty ext: no-op)
//! ```

use indexmap::IndexMap;

/// Attribute table: entry name → attribute string, in declaration order.
pub type Table = IndexMap<String, String>;

/// An edit applied to a base table by [`build_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEdit {
    /// Add the entry, or replace the base definition outright.
    Set(String),
    /// Remove the entry from the result. A no-op if the base lacks it.
    Delete,
}

/// Build a table from `(name, attributes)` pairs.
pub fn table_from<'a, I>(entries: I) -> Table
where
    I: IntoIterator<Item = &'a (&'a str, &'a str)>,
{
    entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Apply `edits` on top of `base`.
///
/// Replaced entries keep their base position; new entries are appended in
/// edit order.
pub fn build_table<'a, I>(base: &Table, edits: I) -> Table
where
    I: IntoIterator<Item = (&'a str, TableEdit)>,
{
    let mut out = base.clone();
    for (name, edit) in edits {
        match edit {
            TableEdit::Set(attrs) => {
                out.insert(name.to_string(), attrs);
            }
            TableEdit::Delete => {
                out.shift_remove(name);
            }
        }
    }
    out
}

/// Append attribute clauses to existing entries.
///
/// A non-empty extension yields `base + " " + extension`. An empty extension
/// leaves the entry unchanged. Extensions naming an entry the base lacks are
/// ignored.
pub fn extend_table<'a, I>(base: &Table, extensions: I) -> Table
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = base.clone();
    for (name, extension) in extensions {
        let Some(current) = out.get_mut(name) else {
            tracing::warn!(entry = name, "extension names an entry missing from the base table; ignored");
            continue;
        };
        if extension.is_empty() {
            continue;
        }
        current.push(' ');
        current.push_str(extension);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Table {
        table_from(&[("A", "1"), ("B", "2")])
    }

    #[test]
    fn override_wins_and_missing_delete_is_noop() {
        let got = build_table(&base(), [("B", TableEdit::Set("3".into())), ("C", TableEdit::Delete)]);
        assert_eq!(got, table_from(&[("A", "1"), ("B", "3")]));
    }

    #[test]
    fn delete_removes_base_entry() {
        let got = build_table(&base(), [("A", TableEdit::Delete), ("C", TableEdit::Set("4".into()))]);
        assert_eq!(got.keys().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(got["C"], "4");
    }

    #[test]
    fn replaced_entries_keep_position() {
        let got = build_table(&base(), [("A", TableEdit::Set("9".into()))]);
        assert_eq!(got.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>(), vec!["A=9", "B=2"]);
    }

    #[test]
    fn extension_appends_or_is_noop() {
        let base = table_from(&[("Brawny", "Type=Background Require=\"strength >= 6\"")]);
        let got = extend_table(&base, [("Brawny", "Require=\"vigor >= 6\"")]);
        assert_eq!(got["Brawny"], "Type=Background Require=\"strength >= 6\" Require=\"vigor >= 6\"");

        let unchanged = extend_table(&base, [("Brawny", ""), ("Missing", "X=1")]);
        assert_eq!(unchanged, base);
    }

    #[test]
    fn base_is_not_mutated() {
        let b = base();
        let _ = build_table(&b, [("A", TableEdit::Delete)]);
        assert_eq!(b, base());
    }
}
