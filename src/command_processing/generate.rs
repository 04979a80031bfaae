// src/command_processing/generate.rs
//
// Drives the per-class state machine: parse the buffer, show the selector,
// synthesize and validate accessor pairs, splice them into the class body,
// commit. Classes are strictly sequential in file order; the buffer is
// re-parsed after each commit so later classes see fresh byte offsets.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, info};

use crate::accessor_synthesizer::{AccessorPair, synthesize};
use crate::errors::{AppError, SyntaxError};
use crate::field_selector::{FieldSelector, SelectionResult};
use crate::java_analyzer::{extract_classes, parse_file, parse_source};
use crate::source_editor::{append_members, commit_to_disk, validate_method_text};

/// Runs accessor generation over every file, one at a time. Non-Java paths
/// are skipped silently; real failures stop the run.
pub fn handle_generate(
    files: &[PathBuf],
    selector: &dyn FieldSelector,
    dry_run: bool,
) -> Result<(), AppError> {
    for path in files {
        let pairs = generate_for_file(path, selector, dry_run)?;
        if pairs > 0 {
            info!(
                "Inserted {} accessor pair(s) into {}",
                pairs,
                path.display()
            );
        }
    }
    Ok(())
}

/// Processes one file. Returns the number of accessor pairs generated.
///
/// The precondition check mirrors the editor action: a file that is not
/// Java is a silent no-op, not an error. A path that cannot be read is an
/// I/O error, since the CLI cannot tell "no active file" from a typo.
pub fn generate_for_file(
    path: &Path,
    selector: &dyn FieldSelector,
    dry_run: bool,
) -> Result<usize, AppError> {
    let unit = match parse_file(path) {
        Ok(unit) => unit,
        Err(AppError::Syntax(SyntaxError::UnsupportedLanguage(_))) => {
            info!("Skipping non-Java file: {}", path.display());
            return Ok(0);
        }
        Err(e) => return Err(e),
    };

    let mut commit = |contents: &str| commit_to_disk(path, contents);
    let (_, pairs) = generate_in_source(unit.source, path, selector, dry_run, &mut commit)?;
    Ok(pairs)
}

/// Core per-class loop over an in-memory buffer. `commit` is invoked once
/// per confirmed class with the complete new buffer, after every pair for
/// that class has been synthesized and validated; a failure anywhere in a
/// class leaves the buffer (and therefore the committed state) as it was.
///
/// Returns the final buffer and the number of pairs generated.
pub fn generate_in_source(
    mut source: String,
    path: &Path,
    selector: &dyn FieldSelector,
    dry_run: bool,
    commit: &mut dyn FnMut(&str) -> Result<(), AppError>,
) -> Result<(String, usize), AppError> {
    let mut class_index = 0;
    let mut total_pairs = 0;

    loop {
        let unit = parse_source(&source, path)?;
        let classes = extract_classes(&unit)?;
        if class_index >= classes.len() {
            break;
        }
        let class = &classes[class_index];
        debug!(
            "Class {} ({} field(s))",
            class.name,
            class.fields.len()
        );

        match selector.select(&class.name, &class.fields)? {
            SelectionResult::Cancelled => {
                info!("Selection cancelled for class {}; leaving it untouched", class.name);
            }
            SelectionResult::Confirmed(mut fields) => {
                // Insertion follows declaration order no matter how the
                // selection was assembled.
                fields.sort_by_key(|f| {
                    class
                        .fields
                        .iter()
                        .position(|candidate| candidate == f)
                        .unwrap_or(usize::MAX)
                });
                fields.dedup();

                if fields.is_empty() {
                    debug!("Nothing selected for class {}", class.name);
                } else {
                    let mut members = Vec::with_capacity(fields.len() * 2);
                    let mut pairs = Vec::with_capacity(fields.len());
                    for field in &fields {
                        let pair = synthesize(field, &class.name)?;
                        validate_method_text(&pair.getter_name, &pair.getter)?;
                        validate_method_text(&pair.setter_name, &pair.setter)?;
                        members.push(pair.getter.clone());
                        members.push(pair.setter.clone());
                        pairs.push(pair);
                    }

                    if dry_run {
                        print_dry_run(&class.name, &pairs);
                    } else {
                        let new_source = append_members(&source, class, &members)?;
                        commit(&new_source)?;
                        source = new_source;
                    }
                    total_pairs += pairs.len();
                }
            }
        }
        class_index += 1;
    }

    Ok((source, total_pairs))
}

fn print_dry_run(class_name: &str, pairs: &[AccessorPair]) {
    println!();
    println!(
        "{} {}",
        "Would insert into".bold(),
        class_name.bold().green()
    );
    for pair in pairs {
        println!();
        println!("{}", pair.getter);
        println!();
        println!("{}", pair.setter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_selector::AllFieldsSelector;

    #[test]
    fn test_source_without_classes_is_untouched() {
        let source = "// just a comment\n".to_string();
        let mut commits = 0;
        let mut commit = |_: &str| -> Result<(), AppError> {
            commits += 1;
            Ok(())
        };
        let (out, pairs) = generate_in_source(
            source.clone(),
            Path::new("Empty.java"),
            &AllFieldsSelector,
            false,
            &mut commit,
        )
        .unwrap();
        assert_eq!(out, source);
        assert_eq!(pairs, 0);
        assert_eq!(commits, 0);
    }

    #[test]
    fn test_dry_run_leaves_buffer_untouched() {
        let source = "class C {\n    private int n;\n}\n".to_string();
        let mut commit = |_: &str| -> Result<(), AppError> {
            panic!("dry run must not commit");
        };
        let (out, pairs) = generate_in_source(
            source.clone(),
            Path::new("C.java"),
            &AllFieldsSelector,
            true,
            &mut commit,
        )
        .unwrap();
        assert_eq!(out, source);
        assert_eq!(pairs, 1);
    }

    #[test]
    fn test_commit_happens_once_per_confirmed_class() {
        let source =
            "class A {\n    private int a;\n}\n\nclass B {\n    private int b;\n}\n".to_string();
        let mut commits = 0;
        let mut commit = |_: &str| -> Result<(), AppError> {
            commits += 1;
            Ok(())
        };
        let (_, pairs) = generate_in_source(
            source,
            Path::new("AB.java"),
            &AllFieldsSelector,
            false,
            &mut commit,
        )
        .unwrap();
        assert_eq!(pairs, 2);
        assert_eq!(commits, 2);
    }
}
