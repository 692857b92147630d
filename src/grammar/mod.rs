mod calls;
mod definition;

#[cfg(test)]
mod tests;

pub use calls::scan_calls;
pub use definition::{recognize, Definition};

use std::collections::BTreeSet;

use crate::normalizer::normalize_lines;

/// One contiguous span of a file: from a definition line (or the file
/// start) up to the next definition line or end of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The definition opening this span; `None` for the preamble span
    /// before the first definition line.
    pub definition: Option<Definition>,
    /// The comment block following the definition line (or, for the
    /// preamble, the file's leading comment), `%` markers stripped per
    /// line, each line keeping its trailing newline.
    pub doc: String,
    /// Identifiers invoked as calls within this span's code region.
    pub calls: BTreeSet<String>,
    /// 1-based physical line where the definition began; 1 for the
    /// preamble.
    pub source_line: usize,
}

impl Section {
    fn preamble() -> Self {
        Section {
            definition: None,
            doc: String::new(),
            calls: BTreeSet::new(),
            source_line: 1,
        }
    }

    fn open(definition: Definition, source_line: usize) -> Self {
        Section {
            definition: Some(definition),
            doc: String::new(),
            calls: BTreeSet::new(),
            source_line,
        }
    }
}

/// Scan source text into the ordered section list.
///
/// Always yields at least one section: the preamble, whose `doc` holds
/// the file's leading comment block (if any). Each recognized definition
/// line opens a new section; every other line contributes either to the
/// open section's docstring or to its call set.
pub fn scan_sections(source: &str) -> Vec<Section> {
    let mut sections = vec![Section::preamble()];
    // Comment capture is active at the file head (leading comment) and
    // right after each definition line (docstring). Blank lines before
    // the block are skipped; a blank line after it closes the block.
    let mut capturing_doc = true;

    for line in normalize_lines(source) {
        if capturing_doc {
            if line.is_comment() {
                let current = sections.last_mut().expect("section list is never empty");
                current.doc.push_str(strip_comment_marker(&line.text));
                current.doc.push('\n');
                continue;
            }
            if line.is_blank() {
                let current = sections.last().expect("section list is never empty");
                if current.doc.is_empty() {
                    continue;
                }
            }
            capturing_doc = false;
        }

        if line.is_blank() || line.is_comment() {
            continue;
        }

        match recognize(&line.text) {
            Some(definition) => {
                sections.push(Section::open(definition, line.number));
                capturing_doc = true;
            }
            None => {
                let current = sections.last_mut().expect("section list is never empty");
                scan_calls(&line.text, &mut current.calls);
            }
        }
    }

    sections
}

/// Strip the leading whitespace and first `%` from a comment line,
/// keeping the remainder verbatim.
fn strip_comment_marker(text: &str) -> &str {
    let trimmed = text.trim_start();
    trimmed.strip_prefix('%').unwrap_or(trimmed)
}
