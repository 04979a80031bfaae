// src/java_analyzer/core.rs
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Tree};

pub use crate::errors::SyntaxError; // Re-export for use in parser.rs

// Java language parser
pub fn get_tree_sitter_java() -> Language {
    tree_sitter_java::language()
}

/// A parsed Java source file, owning the tree-sitter tree and the text it
/// was produced from. Read-only from the model's perspective; mutation goes
/// through the source editor, which re-parses into a fresh unit.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// File path
    pub path: PathBuf,
    /// tree-sitter parse tree
    pub tree: Tree,
    /// Source text
    pub source: String,
    /// Content hash
    pub content_hash: String,
    /// Language identifier
    pub language_id: String,
}

/// One class declaration found in a source unit, with enough position data
/// to append members at the end of its body. Nested classes appear as
/// independent entries, outermost first.
#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub name: String,
    /// Byte range of the whole declaration
    pub range: (usize, usize),
    /// Byte range of the class body, including the braces
    pub body_range: (usize, usize),
    /// Column of the `class` keyword line, used to indent inserted members
    pub start_column: usize,
    /// Fields in declaration order
    pub fields: Vec<FieldDeclaration>,
}

/// One field declarator. A `field_declaration` with several declarators
/// yields one entry per declarator, sharing type and doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    /// Presentable type text, verbatim from the source (e.g. `List<String>`)
    pub type_name: String,
    /// Raw doc comment including the `/**` and `*/` markers, if present
    pub doc_comment: Option<String>,
    /// Byte range of the owning declaration, used to restore declaration order
    pub range: (usize, usize),
}

impl FieldDeclaration {
    /// True only for the primitive `boolean` type; boxed `Boolean` does not
    /// count and keeps the `get` prefix.
    pub fn is_primitive_boolean(&self) -> bool {
        self.type_name == "boolean"
    }

    /// Rendering used in the selection prompt, e.g. `int count`.
    pub fn presentable(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }
}

/// Maps a path to a language identifier. Only Java sources are supported;
/// everything else is reported so the caller can skip the file silently.
pub fn detect_language(path: &Path) -> Result<String, SyntaxError> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    match extension {
        "java" => Ok("java".to_string()),
        _ => Err(SyntaxError::UnsupportedLanguage(format!(
            "Unsupported file extension: {}",
            extension
        ))),
    }
}

// Utility functions
pub fn calculate_hash(content: &str) -> String {
    // Simple hash function to avoid dependency on sha2
    let mut hash: u64 = 0;
    for byte in content.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u64);
    }
    format!("{:x}", hash)
}
