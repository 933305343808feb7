//! Typed attribute records.
//!
//! A [`Record`] is the parsed form of one attribute string. It keeps every
//! occurrence of every key in record order, so lookups follow two rules:
//!
//! - [`Record::value`] answers with the **last** occurrence of a key. Table
//!   extensions append clauses, so a later `Type=...` overrides an earlier one.
//! - [`Record::values`] concatenates the elements of **every** occurrence, so
//!   appended `Require=...` clauses accumulate.
//!
//! `Display` serializes a record back into the attribute-string format, quoting
//! only the elements that need it.

use std::fmt;

use super::scanner::{Scanned, scan};

/// The value carried by one occurrence of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Key given without `=`; its value is the key name itself.
    Flag,
    /// One or more elements. A scalar is a one-element list.
    Values(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: AttrValue,
}

/// Parsed attribute string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    attrs: Vec<Attr>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute string. Never fails; see the scanner for how
    /// malformed input degrades.
    pub fn parse(record: &str) -> Self {
        let attrs = scan(record)
            .into_iter()
            .map(|s| match s {
                Scanned::Attr { key, elements } => Attr { key, value: AttrValue::Values(elements) },
                Scanned::Flag(key) => Attr { key, value: AttrValue::Flag },
            })
            .collect();
        Record { attrs }
    }

    /// Scalar value of `key`: the last occurrence, list elements re-joined
    /// with `,`. `None` when the key is absent.
    pub fn value(&self, key: &str) -> Option<String> {
        let attr = self.attrs.iter().rev().find(|a| a.key == key)?;
        Some(match &attr.value {
            AttrValue::Flag => attr.key.clone(),
            AttrValue::Values(elements) => elements.join(","),
        })
    }

    /// All elements of every occurrence of `key`, in record order. Empty when
    /// the key is absent.
    pub fn values(&self, key: &str) -> Vec<String> {
        self.attrs
            .iter()
            .filter(|a| a.key == key)
            .flat_map(|a| match &a.value {
                AttrValue::Flag => vec![a.key.clone()],
                AttrValue::Values(elements) => elements.clone(),
            })
            .collect()
    }

    /// True if `key` occurs at least once.
    pub fn has(&self, key: &str) -> bool {
        self.attrs.iter().any(|a| a.key == key)
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for attr in &self.attrs {
            if !keys.contains(&attr.key.as_str()) {
                keys.push(&attr.key);
            }
        }
        keys
    }

    /// Every occurrence, in record order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Append `key=value`.
    pub fn with_scalar(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr { key: key.into(), value: AttrValue::Values(vec![value.into()]) });
        self
    }

    /// Append `key=a,b,...`. An empty list appends nothing, since there is no
    /// way to spell it in the attribute-string format.
    pub fn with_list<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements: Vec<String> = values.into_iter().map(Into::into).collect();
        if !elements.is_empty() {
            self.attrs.push(Attr { key: key.into(), value: AttrValue::Values(elements) });
        }
        self
    }

    /// Append a bare `key`.
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.attrs.push(Attr { key: key.into(), value: AttrValue::Flag });
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&attr.key)?;
            if let AttrValue::Values(elements) = &attr.value {
                f.write_str("=")?;
                for (j, element) in elements.iter().enumerate() {
                    if j > 0 {
                        f.write_str(",")?;
                    }
                    write_element(f, element)?;
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Record {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Record::parse(s))
    }
}

fn needs_quotes(element: &str) -> bool {
    element.is_empty() || element.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\\' | ',' | '='))
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &str) -> fmt::Result {
    if !needs_quotes(element) {
        return f.write_str(element);
    }
    f.write_str("\"")?;
    for c in element.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_occurrence_wins_for_scalars() {
        let r = Record::parse("Type=Noun Require=a Type=Animal Require=b,c");
        assert_eq!(r.value("Type").as_deref(), Some("Animal"));
        assert_eq!(r.values("Require"), vec!["a", "b", "c"]);
        assert_eq!(r.keys(), vec!["Type", "Require"]);
    }

    #[test]
    fn flag_value_is_its_own_name() {
        let r = Record::parse("Unique Type=Noun");
        assert!(r.has("Unique"));
        assert_eq!(r.value("Unique").as_deref(), Some("Unique"));
        assert_eq!(r.values("Unique"), vec!["Unique"]);
    }

    #[test]
    fn list_value_as_scalar_rejoins_elements() {
        let r = Record::parse("Long=Robert,Roberto");
        assert_eq!(r.value("Long").as_deref(), Some("Robert,Roberto"));
    }

    #[test]
    fn absent_key_is_none_or_empty() {
        let r = Record::parse("A=1");
        assert_eq!(r.value("B"), None);
        assert!(r.values("B").is_empty());
        assert!(!r.has("a"));
    }

    #[test]
    fn serializes_with_minimal_quoting() {
        let r = Record::new()
            .with_scalar("Type", "Short")
            .with_list("Long", ["Mary Ann", "Marian"])
            .with_scalar("Note", r#"a "b" c"#)
            .with_scalar("Empty", "")
            .with_list("None", Vec::<String>::new())
            .with_flag("Unique");
        assert_eq!(r.to_string(), r#"Type=Short Long="Mary Ann",Marian Note="a \"b\" c" Empty="" Unique"#);
    }

    #[test]
    fn reparse_of_serialized_record_is_identical() {
        let r = Record::new().with_scalar("K", "x, y = z\\").with_list("L", ["", "a", "b c"]).with_flag("F");
        assert_eq!(Record::parse(&r.to_string()), r);
    }
}
