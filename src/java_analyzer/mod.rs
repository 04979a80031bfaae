// src/java_analyzer/mod.rs
pub mod core;
pub mod parser;

// Re-export key items for easier access from outside this module.
pub use self::core::{ClassDeclaration, FieldDeclaration, SourceUnit, detect_language};
pub use self::parser::{extract_classes, parse_file, parse_source};
