//! Attribute-string scanning.
//!
//! Turns a raw record such as
//!
//! ```text
//! Type=Short Long=Robert,Roberto Note="said \"Bob\", mostly" Unique
//! ```
//!
//! into a flat list of [`Scanned`] items, one per top-level token:
//!
//! ```text
//! Attr { key: "Type", elements: ["Short"] }
//! Attr { key: "Long", elements: ["Robert", "Roberto"] }
//! Attr { key: "Note", elements: ["said \"Bob\", mostly"] }
//! Flag("Unique")
//! ```
//!
//! The scan is permissive. It never fails: malformed input (an unterminated
//! quote) simply ends the scan and drops the attribute that contained it.

use std::iter::Peekable;
use std::str::Chars;

/// One top-level token of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scanned {
    /// `Key=value[,value...]`, elements unquoted and unescaped.
    Attr { key: String, elements: Vec<String> },
    /// A bare key with no `=`.
    Flag(String),
}

/// Outcome of scanning one element.
enum Element {
    /// Element ended on a `,`: another element of the same value follows.
    More(String),
    /// Element ended on whitespace or end of input.
    Last(String),
    /// A quote was opened and never closed.
    Unterminated,
}

/// Scan `record` into its top-level tokens, in record order.
pub(crate) fn scan(record: &str) -> Vec<Scanned> {
    let mut out = Vec::new();
    let mut chars = record.chars().peekable();

    loop {
        skip_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }

        let key = scan_key(&mut chars);
        if chars.peek() != Some(&'=') {
            if !key.is_empty() {
                out.push(Scanned::Flag(key));
            }
            continue;
        }
        chars.next();

        let mut elements = Vec::new();
        let complete = loop {
            match scan_element(&mut chars) {
                Element::More(e) => elements.push(e),
                Element::Last(e) => {
                    elements.push(e);
                    break true;
                }
                Element::Unterminated => break false,
            }
        };

        if !complete {
            tracing::debug!(key = %key, "unterminated quote; dropping attribute and rest of record");
            break;
        }
        if !key.is_empty() {
            out.push(Scanned::Attr { key, elements });
        }
    }

    out
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn scan_key(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut key = String::new();
    while let Some(c) = chars.next_if(|c| *c != '=' && !c.is_whitespace()) {
        key.push(c);
    }
    key
}

fn scan_element(chars: &mut Peekable<Chars<'_>>) -> Element {
    let mut buf = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if !scan_quoted(chars, &mut buf) {
                    return Element::Unterminated;
                }
            }
            ',' => return Element::More(buf),
            c if c.is_whitespace() => return Element::Last(buf),
            c => buf.push(c),
        }
    }
    Element::Last(buf)
}

/// Consume a quoted run (the opening quote is already consumed) into `buf`.
/// Returns false if input ends before the closing quote.
fn scan_quoted(chars: &mut Peekable<Chars<'_>>, buf: &mut String) -> bool {
    while let Some(c) = chars.next() {
        match c {
            '"' => return true,
            '\\' => match chars.next() {
                Some(escaped) => buf.push(escaped),
                None => return false,
            },
            c => buf.push(c),
        }
    }
    false
}
