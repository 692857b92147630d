use serde::{Deserialize, Serialize};

/// Result of parsing one MATLAB source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    /// The file's primary entity; never absent. A file with zero
    /// recognized definitions yields a `Script` main entity.
    pub main: Entity,
    /// Subsequent entities (subfunctions, methods) in appearance order.
    pub sub: Vec<Entity>,
}

/// One documented unit in a file: a script, function, or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Script(ScriptEntity),
    Function(FunctionEntity),
    Class(ClassEntity),
}

/// A whole-file script: no signature of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntity {
    /// Docstring text, `%` markers stripped per line.
    pub doc: String,
    /// Invoked identifiers, unique and lexicographically sorted.
    pub calls: Vec<String>,
    /// Always 1 for scripts.
    pub source_line: usize,
}

/// A function or subfunction definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntity {
    /// Declared function name.
    pub name: String,
    /// Input parameters in declaration order.
    pub inargs: Vec<String>,
    /// Output parameters in declaration order.
    pub outargs: Vec<String>,
    /// Docstring text, `%` markers stripped per line.
    pub doc: String,
    /// Invoked identifiers, unique and lexicographically sorted.
    pub calls: Vec<String>,
    /// 1-based line where the definition line began.
    pub source_line: usize,
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntity {
    /// Declared class name.
    pub name: String,
    /// Superclasses in declaration order.
    pub superclasses: Vec<String>,
    /// Docstring text, `%` markers stripped per line.
    pub doc: String,
    /// Invoked identifiers, unique and lexicographically sorted.
    pub calls: Vec<String>,
    /// 1-based line where the definition line began.
    pub source_line: usize,
}

impl Entity {
    /// The entity's docstring.
    pub fn doc(&self) -> &str {
        match self {
            Entity::Script(e) => &e.doc,
            Entity::Function(e) => &e.doc,
            Entity::Class(e) => &e.doc,
        }
    }

    /// The entity's call set.
    pub fn calls(&self) -> &[String] {
        match self {
            Entity::Script(e) => &e.calls,
            Entity::Function(e) => &e.calls,
            Entity::Class(e) => &e.calls,
        }
    }

    /// 1-based line of the definition (1 for scripts).
    pub fn source_line(&self) -> usize {
        match self {
            Entity::Script(e) => e.source_line,
            Entity::Function(e) => e.source_line,
            Entity::Class(e) => e.source_line,
        }
    }

    /// The declared name; scripts have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::Script(_) => None,
            Entity::Function(e) => Some(&e.name),
            Entity::Class(e) => Some(&e.name),
        }
    }

    pub(crate) fn prepend_doc(&mut self, leading: &str) {
        let doc = match self {
            Entity::Script(e) => &mut e.doc,
            Entity::Function(e) => &mut e.doc,
            Entity::Class(e) => &mut e.doc,
        };
        doc.insert_str(0, leading);
    }
}
