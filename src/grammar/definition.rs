use lazy_static::lazy_static;
use regex::Regex;

/// Identifier: a letter followed by letters, digits or underscores.
pub(crate) const IDENT: &str = r"[A-Za-z]\w*";

lazy_static! {
    /// `function [out =] name[(in, ...)]`, output clause either a single
    /// identifier or a bracketed vector.
    static ref FUNCTION_RE: Regex = Regex::new(&format!(
        r"^\s*function\s+(?:(?:\[\s*(?P<outvec>{id}(?:\s*,\s*{id})*)\s*\]|(?P<outone>{id}))\s*=\s*)?(?P<name>{id})\s*(?:\(\s*(?P<inargs>{id}(?:\s*,\s*{id})*)?\s*\))?",
        id = IDENT
    ))
    .unwrap();

    /// `classdef Name [< Super1 [& Super2 ...]]`.
    static ref CLASS_RE: Regex = Regex::new(&format!(
        r"^\s*classdef\s+(?P<name>{id})(?:\s*<\s*(?P<supers>{id}(?:\s*&\s*{id})*))?",
        id = IDENT
    ))
    .unwrap();
}

/// A recognized definition line, before docstring and call attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Function {
        name: String,
        inargs: Vec<String>,
        outargs: Vec<String>,
    },
    Class {
        name: String,
        superclasses: Vec<String>,
    },
}

impl Definition {
    /// The defined identifier.
    pub fn name(&self) -> &str {
        match self {
            Definition::Function { name, .. } => name,
            Definition::Class { name, .. } => name,
        }
    }
}

/// Try to recognize a logical line as a definition line.
///
/// Returns `None` when the line matches neither grammar form, or when the
/// text after the matched signature is anything but whitespace or an
/// end-of-line comment. Malformed signatures (unbalanced parentheses,
/// stray trailing tokens) therefore fall through as ordinary code.
pub fn recognize(line: &str) -> Option<Definition> {
    if let Some(caps) = FUNCTION_RE.captures(line) {
        if signature_terminated(line, caps.get(0).map(|m| m.end()).unwrap_or(0)) {
            let outargs = if let Some(vector) = caps.name("outvec") {
                split_list(vector.as_str(), ',')
            } else if let Some(single) = caps.name("outone") {
                vec![single.as_str().to_string()]
            } else {
                Vec::new()
            };
            let inargs = caps
                .name("inargs")
                .map(|m| split_list(m.as_str(), ','))
                .unwrap_or_default();
            return Some(Definition::Function {
                name: caps["name"].to_string(),
                inargs,
                outargs,
            });
        }
    }

    if let Some(caps) = CLASS_RE.captures(line) {
        if signature_terminated(line, caps.get(0).map(|m| m.end()).unwrap_or(0)) {
            let superclasses = caps
                .name("supers")
                .map(|m| split_list(m.as_str(), '&'))
                .unwrap_or_default();
            return Some(Definition::Class {
                name: caps["name"].to_string(),
                superclasses,
            });
        }
    }

    None
}

/// Whether the line past the matched signature holds only whitespace or
/// an end-of-line comment.
fn signature_terminated(line: &str, end: usize) -> bool {
    let rest = line[end..].trim_start();
    rest.is_empty() || rest.starts_with('%')
}

/// Split a declaration list on `sep`, trimming each element.
fn split_list(list: &str, sep: char) -> Vec<String> {
    list.split(sep).map(|item| item.trim().to_string()).collect()
}
