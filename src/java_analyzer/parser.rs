// src/java_analyzer/parser.rs
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, Query};
use tracing::debug;

use crate::errors::{AppError, SyntaxError};
use super::core::{
    ClassDeclaration, FieldDeclaration, SourceUnit, calculate_hash, detect_language,
    get_tree_sitter_java,
};

// Class declarations, including nested ones. Fields are not captured here;
// they are read by walking each class body so declaration order is kept.
const CLASS_QUERY: &str = r#"
    (class_declaration name: (identifier) @class.name) @class.declaration
"#;

/// Parses Java source text into a [`SourceUnit`].
///
/// tree-sitter is error tolerant, so a file with minor syntax damage still
/// yields a usable tree; only a total parser failure is reported.
pub fn parse_source(source: &str, path: &Path) -> Result<SourceUnit, SyntaxError> {
    let mut parser = Parser::new();
    parser.set_language(get_tree_sitter_java()).map_err(|e| {
        SyntaxError::InitializationError(format!("Failed to set Java language for parser: {}", e))
    })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SyntaxError::ParseError(format!("Failed to parse file: {:?}", path)))?;

    if tree.root_node().has_error() {
        debug!("Parse tree for {:?} contains error nodes", path);
    }

    Ok(SourceUnit {
        path: path.to_path_buf(),
        tree,
        source: source.to_string(),
        content_hash: calculate_hash(source),
        language_id: "java".to_string(),
    })
}

/// Reads and parses a Java file from disk.
pub fn parse_file(path: &Path) -> Result<SourceUnit, AppError> {
    detect_language(path)?;
    let source = fs::read_to_string(path)
        .map_err(|e| AppError::IO(format!("reading {}", path.display()), e))?;
    Ok(parse_source(&source, path)?)
}

/// Extracts every class declaration from the unit, outermost first, each
/// carrying its direct fields in declaration order.
pub fn extract_classes(unit: &SourceUnit) -> Result<Vec<ClassDeclaration>, SyntaxError> {
    let query = Query::new(get_tree_sitter_java(), CLASS_QUERY)
        .map_err(|e| SyntaxError::QueryError(format!("Failed to create Java class query: {}", e)))?;

    let source_bytes = unit.source.as_bytes();
    let mut cursor = tree_sitter::QueryCursor::new();
    let matches = cursor.matches(&query, unit.tree.root_node(), source_bytes);

    let mut classes = Vec::new();
    for m in matches {
        let class_node = match m.captures.iter().find(|cap| {
            query.capture_names()[cap.index as usize] == "class.declaration"
        }) {
            Some(cap) => cap.node,
            None => continue,
        };

        let name = class_node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source_bytes).ok())
            .unwrap_or("")
            .to_string();

        let body = match class_node.child_by_field_name("body") {
            Some(body) => body,
            None => continue, // No body to insert into
        };

        classes.push(ClassDeclaration {
            name,
            range: (class_node.start_byte(), class_node.end_byte()),
            body_range: (body.start_byte(), body.end_byte()),
            start_column: class_node.start_position().column,
            fields: extract_fields(body, source_bytes),
        });
    }

    // Query match order is not guaranteed across patterns; restore file order.
    classes.sort_by_key(|c| c.range.0);
    Ok(classes)
}

/// Walks the direct children of a class body, collecting one
/// [`FieldDeclaration`] per declarator. Fields of nested classes belong to
/// their own class entry and are not picked up here.
fn extract_fields(body: Node, source_bytes: &[u8]) -> Vec<FieldDeclaration> {
    let mut fields = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        if child.kind() != "field_declaration" {
            continue;
        }

        let type_name = child
            .child_by_field_name("type")
            .and_then(|n| n.utf8_text(source_bytes).ok())
            .unwrap_or("")
            .trim()
            .to_string();

        let doc_comment = doc_comment_for(child, source_bytes);

        let mut decl_cursor = child.walk();
        for decl in child.children(&mut decl_cursor) {
            if decl.kind() != "variable_declarator" {
                continue;
            }
            let name = decl
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(source_bytes).ok())
                .unwrap_or("")
                .to_string();
            fields.push(FieldDeclaration {
                name,
                type_name: type_name.clone(),
                doc_comment: doc_comment.clone(),
                range: (child.start_byte(), child.end_byte()),
            });
        }
    }
    fields
}

/// Returns the `/** ... */` comment immediately preceding the declaration,
/// markers included. Line comments and detached block comments do not count.
fn doc_comment_for(field_node: Node, source_bytes: &[u8]) -> Option<String> {
    let prev = field_node.prev_sibling()?;
    // Grammar versions differ on the comment node name.
    if !matches!(prev.kind(), "comment" | "block_comment" | "line_comment") {
        return None;
    }
    let text = prev.utf8_text(source_bytes).ok()?;
    if text.starts_with("/**") {
        Some(text.to_string())
    } else {
        None
    }
}
