//! Tag records produced by the scanners

use serde::{Serialize, Serializer};

/// Descriptor for one kind of tag a scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagKind {
    /// Single-letter indicator written into tag files
    pub letter: char,
    /// Kind name, e.g. `function`
    pub name: &'static str,
    /// Plural category label, e.g. `functions`
    pub description: &'static str,
}

/// The only kind the shell scanner declares
pub const FUNCTION_KIND: TagKind = TagKind {
    letter: 'f',
    name: "function",
    description: "functions",
};

/// One discovered definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(serialize_with = "serialize_kind_name")]
    pub kind: TagKind,
    /// 1-based line number of the definition
    pub line: usize,
    /// The raw source line, used as the tag-file search pattern
    pub pattern: String,
}

impl Tag {
    pub fn function(name: impl Into<String>, line: usize, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FUNCTION_KIND,
            line,
            pattern: pattern.into(),
        }
    }
}

fn serialize_kind_name<S: Serializer>(kind: &TagKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.name)
}

/// All tags found in one file, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagFile {
    /// Path as given by the caller
    pub file: String,
    /// Canonical language name
    pub language: String,
    pub tags: Vec<Tag>,
}

