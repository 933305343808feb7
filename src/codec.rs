//! Attribute-string codec.
//!
//! Every rule-data table in a plugin is a map from entry name to an
//! *attribute string*:
//!
//! ```text
//! Key1=value1 Key2=val2,val3 Key3="quoted value, with comma" Key4
//! ```
//!
//! This module turns those strings into typed values and back, and derives
//! tables from one another.
//!
//! ## How the parts work together
//!
//! ```text
//! &str ── scan (scanner.rs) ──▶ Vec<Scanned> ──▶ Record (record.rs)
//!                                                  │  value / values
//!                                                  ▼
//!                                           String / Vec<String>
//!
//! Table ── build_table / extend_table (table.rs) ──▶ Table
//! ```
//!
//! ## Responsibilities by module
//!
//! - `scanner.rs`: tokenizes a record; handles quoting, escapes, commas.
//! - `record.rs`: the typed `Record` IR, lookups and serialization.
//! - `table.rs`: `Table`, `TableEdit` and the derive-one-table-from-another
//!   functions.
//!
//! ## Failure model
//!
//! Nothing here returns an error. A missing key is an ordinary outcome
//! (`None` / empty list), and malformed quoting degrades to "absent".

#[path = "codec/record.rs"]
mod record;
#[path = "codec/scanner.rs"]
mod scanner;
#[path = "codec/table.rs"]
mod table;

pub use record::{Attr, AttrValue, Record};
pub use table::{Table, TableEdit, build_table, extend_table, table_from};

/// Scalar value of `key` in `record`, or `None` if absent.
///
/// # Example
/// ```
/// use quilvyn_frontier::parse_value;
///
/// assert_eq!(parse_value(r#"Type=Short Long=Robert"#, "Type").as_deref(), Some("Short"));
/// assert_eq!(parse_value(r#"Note="two words""#, "Note").as_deref(), Some("two words"));
/// assert_eq!(parse_value("Type=Short", "Long"), None);
/// ```
pub fn parse_value(record: &str, key: &str) -> Option<String> {
    Record::parse(record).value(key)
}

/// Elements of `key` in `record`, split on top-level commas. Empty if absent.
///
/// # Example
/// ```
/// use quilvyn_frontier::parse_value_list;
///
/// let got = parse_value_list(r#"Long=Robert,"Bob Jr",Rob"#, "Long");
/// assert_eq!(got, vec!["Robert", "Bob Jr", "Rob"]);
/// ```
pub fn parse_value_list(record: &str, key: &str) -> Vec<String> {
    Record::parse(record).values(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Value {
        Scalar(String),
        List(Vec<String>),
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        let text = "[ -~]{0,12}";
        prop_oneof![
            text.prop_map(Value::Scalar),
            prop::collection::vec(text, 1..5).prop_map(Value::List),
        ]
    }

    fn mapping_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
        prop::collection::btree_map("[A-Z][a-z]{0,8}", value_strategy(), 0..6)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn serialize_then_parse_round_trips(mapping in mapping_strategy()) {
            let mut record = Record::new();
            for (key, value) in &mapping {
                record = match value {
                    Value::Scalar(s) => record.with_scalar(key, s),
                    Value::List(l) => record.with_list(key, l.iter().cloned()),
                };
            }
            let text = record.to_string();

            for (key, value) in &mapping {
                match value {
                    Value::Scalar(s) => {
                        let parsed = parse_value(&text, key);
                        prop_assert_eq!(parsed.as_deref(), Some(s.as_str()))
                    }
                    Value::List(l) => prop_assert_eq!(&parse_value_list(&text, key), l),
                }
            }
        }

        #[test]
        fn scalar_list_is_singleton_of_value(s in "[A-Za-z0-9+./-]{1,10}") {
            let text = format!("Other=1 Key={s} Tail=x");
            prop_assert_eq!(parse_value_list(&text, "Key"), vec![parse_value(&text, "Key").unwrap()]);
        }
    }

    #[test]
    fn documented_record_shape() {
        let r = r#"Key1=value1 Key2=val2,val3 Key3="quoted value, with comma" Key4"#;
        assert_eq!(parse_value(r, "Key1").as_deref(), Some("value1"));
        assert_eq!(parse_value_list(r, "Key2"), vec!["val2", "val3"]);
        assert_eq!(parse_value(r, "Key3").as_deref(), Some("quoted value, with comma"));
        assert_eq!(parse_value_list(r, "Key3"), vec!["quoted value, with comma"]);
        assert_eq!(parse_value(r, "Key4").as_deref(), Some("Key4"));
    }

    #[test]
    fn key_must_match_whole_token() {
        let r = "LongName=x Long=y";
        assert_eq!(parse_value(r, "Long").as_deref(), Some("y"));
        assert_eq!(parse_value(r, "Name"), None);
    }

    #[test]
    fn malformed_quote_reads_as_absent() {
        assert_eq!(parse_value(r#"A="never closed"#, "A"), None);
        assert!(parse_value_list(r#"A="never closed"#, "A").is_empty());
    }
}
