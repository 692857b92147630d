use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::definition::IDENT;

lazy_static! {
    /// An identifier, optionally prefixed by `name.` namespace segments,
    /// followed by an open parenthesis.
    static ref CALL_RE: Regex = Regex::new(&format!(
        r"(?:{id}\.)*(?P<name>{id})[ \t]*\(",
        id = IDENT
    ))
    .unwrap();
}

/// Scan a code line for call tokens, inserting the bare identifiers
/// (namespace prefixes discarded) into `calls`.
///
/// Text after a `%` is stripped first; end-of-line comments are not call
/// sources. Matching is non-overlapping, left to right.
pub fn scan_calls(line: &str, calls: &mut BTreeSet<String>) {
    let code = line.split('%').next().unwrap_or("");
    for caps in CALL_RE.captures_iter(code) {
        calls.insert(caps["name"].to_string());
    }
}
