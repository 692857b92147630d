mod entity;


pub use entity::{ClassEntity, Entity, FunctionEntity, ParsedFile, ScriptEntity};

use std::collections::BTreeSet;

use crate::grammar::{scan_sections, Definition, Section};

/// Parse MATLAB source text into its entity hierarchy.
///
/// This never fails: malformed definition lines degrade to ordinary code
/// and a file without recognized definitions yields a `Script` main
/// entity. Parsing is pure and re-entrant; callers may parse independent
/// files in parallel.
pub fn parse_source(source: &str) -> ParsedFile {
    assemble(scan_sections(source))
}

/// Convert the grammar's ordered section list into a `ParsedFile`.
///
/// Panics when called with an empty section list; the grammar always
/// produces at least the preamble section.
fn assemble(sections: Vec<Section>) -> ParsedFile {
    assert!(
        !sections.is_empty(),
        "entity assembler requires at least the preamble section"
    );

    if sections.iter().all(|s| s.definition.is_none()) {
        // Script file: leading comment plus every call in the file.
        let mut doc = String::new();
        let mut calls = BTreeSet::new();
        for section in sections {
            doc.push_str(&section.doc);
            calls.extend(section.calls);
        }
        return ParsedFile {
            main: Entity::Script(ScriptEntity {
                doc,
                calls: calls.into_iter().collect(),
                source_line: 1,
            }),
            sub: Vec::new(),
        };
    }

    // Preamble code carries no meaning in function/class files and is
    // discarded; its comment block becomes part of the first entity's
    // docstring.
    let mut leading = String::new();
    let mut entities = Vec::new();
    for section in sections {
        match section.definition {
            None => leading = section.doc,
            Some(definition) => entities.push(build_entity(
                definition,
                section.doc,
                section.calls,
                section.source_line,
            )),
        }
    }

    let mut iter = entities.into_iter();
    let mut main = iter
        .next()
        .expect("at least one section holds a definition");
    if !leading.is_empty() {
        main.prepend_doc(&leading);
    }

    ParsedFile {
        main,
        sub: iter.collect(),
    }
}

fn build_entity(
    definition: Definition,
    doc: String,
    calls: BTreeSet<String>,
    source_line: usize,
) -> Entity {
    // BTreeSet iteration gives the sorted-unique call sequence.
    let calls: Vec<String> = calls.into_iter().collect();
    match definition {
        Definition::Function {
            name,
            inargs,
            outargs,
        } => Entity::Function(FunctionEntity {
            name,
            inargs,
            outargs,
            doc,
            calls,
            source_line,
        }),
        Definition::Class { name, superclasses } => Entity::Class(ClassEntity {
            name,
            superclasses,
            doc,
            calls,
            source_line,
        }),
    }
}
