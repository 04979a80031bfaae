// src/source_editor/mod.rs
//
// Scoped mutation of the source buffer. All accessor text for a class is
// validated and spliced in one step, then the whole buffer is committed to
// disk through a temp-file rename, so the on-disk file either gains the
// complete pair set for the class or stays byte-identical.

use std::fs;
use std::path::Path;
use tree_sitter::Parser;
use tracing::debug;

use crate::errors::{AppError, SynthesisError, SyntaxError};
use crate::java_analyzer::ClassDeclaration;
use crate::java_analyzer::core::get_tree_sitter_java;

/// Checks that a synthesized method re-parses cleanly. The text is wrapped
/// in a probe class because a bare method is not a valid compilation unit.
pub fn validate_method_text(method_name: &str, text: &str) -> Result<(), AppError> {
    let mut parser = Parser::new();
    parser.set_language(get_tree_sitter_java()).map_err(|e| {
        SyntaxError::InitializationError(format!("Failed to set Java language for parser: {}", e))
    })?;

    let probe = format!("class __Probe {{\n{}\n}}\n", text);
    let tree = parser.parse(&probe, None).ok_or_else(|| {
        SyntaxError::ParseError(format!("Parser failure while validating '{}'", method_name))
    })?;

    if tree.root_node().has_error() {
        return Err(SynthesisError::InvalidMethodText {
            method_name: method_name.to_string(),
            detail: "probe tree contains errors".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Prefixes every non-empty line of a column-0 block with `indent`.
fn indent_block(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Appends already-validated member blocks at the end of the class body,
/// one level deeper than the class itself, returning the new buffer. The
/// input buffer is untouched; the caller swaps it in only on success.
pub fn append_members(
    source: &str,
    class: &ClassDeclaration,
    members: &[String],
) -> Result<String, AppError> {
    if members.is_empty() {
        return Ok(source.to_string());
    }

    let (_, body_end) = class.body_range;
    if body_end == 0 || body_end > source.len() {
        return Err(AppError::Generic(format!(
            "Class '{}' body range is stale for this buffer",
            class.name
        )));
    }

    // Insert between the last member and the closing brace, keeping the
    // brace on its own correctly indented line.
    let brace = body_end - 1;
    let head = source[..brace].trim_end();
    let close_indent = " ".repeat(class.start_column);
    let member_indent = " ".repeat(class.start_column + 4);

    let mut out = String::with_capacity(source.len() + members.iter().map(String::len).sum::<usize>());
    out.push_str(head);
    for member in members {
        out.push_str("\n\n");
        out.push_str(&indent_block(member, &member_indent));
    }
    out.push('\n');
    out.push_str(&close_indent);
    out.push_str(&source[brace..]);

    debug!(
        "Appended {} member blocks to class {}",
        members.len(),
        class.name
    );
    Ok(out)
}

/// Atomically replaces the file contents: write a sibling temp file, then
/// rename over the original. A failure at any point leaves the original
/// untouched.
pub fn commit_to_disk(path: &Path, contents: &str) -> Result<(), AppError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Generic(format!("Invalid target path: {}", path.display())))?;
    let temp_path = path.with_file_name(format!(".{}.javags.{}", file_name, std::process::id()));

    fs::write(&temp_path, contents)
        .map_err(|e| AppError::IO(format!("writing temp file {}", temp_path.display()), e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        // Best effort cleanup; the original file is still intact.
        let _ = fs::remove_file(&temp_path);
        return Err(AppError::IO(
            format!("replacing {}", path.display()),
            e,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java_analyzer::{extract_classes, parse_source};
    use std::path::PathBuf;

    fn first_class(source: &str) -> ClassDeclaration {
        let unit = parse_source(source, &PathBuf::from("T.java")).unwrap();
        extract_classes(&unit).unwrap().remove(0)
    }

    #[test]
    fn test_validate_accepts_well_formed_method() {
        let text = "/**\n * countの取得\n *\n * @return count\n */\npublic int getCount() {\n    return count;\n}";
        assert!(validate_method_text("getCount", text).is_ok());
    }

    #[test]
    fn test_validate_rejects_broken_method() {
        let err = validate_method_text("get", "public int () {").unwrap_err();
        assert!(matches!(
            err,
            AppError::Synthesis(SynthesisError::InvalidMethodText { .. })
        ));
    }

    #[test]
    fn test_indent_block_skips_empty_lines() {
        let block = "/**\n * a\n */\npublic void f() {\n    g();\n}";
        let indented = indent_block(block, "    ");
        assert_eq!(
            indented,
            "    /**\n     * a\n     */\n    public void f() {\n        g();\n    }"
        );
    }

    #[test]
    fn test_append_members_keeps_brace_indentation() {
        let source = "class Counter {\n    private int count;\n}\n";
        let class = first_class(source);
        let member = "public int getCount() {\n    return count;\n}".to_string();
        let out = append_members(source, &class, &[member]).unwrap();
        assert_eq!(
            out,
            "class Counter {\n    private int count;\n\n    public int getCount() {\n        return count;\n    }\n}\n"
        );
    }

    #[test]
    fn test_append_members_into_empty_body() {
        let source = "class Empty {\n}\n";
        let class = first_class(source);
        let member = "public void touch() {\n}".to_string();
        let out = append_members(source, &class, &[member]).unwrap();
        assert_eq!(
            out,
            "class Empty {\n\n    public void touch() {\n    }\n}\n"
        );
    }

    #[test]
    fn test_append_no_members_is_identity() {
        let source = "class C {\n}\n";
        let class = first_class(source);
        assert_eq!(append_members(source, &class, &[]).unwrap(), source);
    }

    #[test]
    fn test_commit_to_disk_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("User.java");
        fs::write(&path, "old").unwrap();
        commit_to_disk(&path, "new contents").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
        // No temp file left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
