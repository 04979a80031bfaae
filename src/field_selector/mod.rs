// src/field_selector/mod.rs
//
// Blocking field selection. The interactive selector is a synchronous
// request/response call so the rest of the pipeline never touches the
// terminal; tests substitute their own implementation of the trait.

use std::io::Write;

use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::AppError;
use crate::java_analyzer::FieldDeclaration;

/// Outcome of one selection round for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The chosen fields, in original declaration order.
    Confirmed(Vec<FieldDeclaration>),
    /// The user backed out; the caller must not mutate this class.
    Cancelled,
}

/// Presents the fields of one class and blocks until the user confirms a
/// subset or cancels.
pub trait FieldSelector {
    fn select(
        &self,
        class_name: &str,
        fields: &[FieldDeclaration],
    ) -> Result<SelectionResult, AppError>;
}

/// Confirms every field without asking. Backs the `--all` flag and the
/// `selector.assume_all` config key.
pub struct AllFieldsSelector;

impl FieldSelector for AllFieldsSelector {
    fn select(
        &self,
        class_name: &str,
        fields: &[FieldDeclaration],
    ) -> Result<SelectionResult, AppError> {
        debug!(
            "Selecting all {} fields of class {} without prompting",
            fields.len(),
            class_name
        );
        Ok(SelectionResult::Confirmed(fields.to_vec()))
    }
}

/// What one line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSelection {
    Cancel,
    All,
    /// 0-based field indices, sorted and deduplicated
    Indices(Vec<usize>),
}

lazy_static! {
    static ref INDEX_TOKEN: Regex = Regex::new(r"^(\d+)(?:-(\d+))?$").unwrap();
}

/// Parses one line of selection input.
///
/// Accepted forms: empty line or `q` to cancel, `all` or `*` for every
/// field, otherwise comma/space separated 1-based indices and `a-b` ranges,
/// e.g. `1,3-5 8`. Duplicates collapse; the result is always in declaration
/// order, no matter the order the user typed.
pub fn parse_selection_input(input: &str, field_count: usize) -> Result<ParsedSelection, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
        return Ok(ParsedSelection::Cancel);
    }
    if trimmed.eq_ignore_ascii_case("all") || trimmed == "*" {
        return Ok(ParsedSelection::All);
    }

    let mut picked = std::collections::BTreeSet::new();
    for token in trimmed.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let caps = INDEX_TOKEN
            .captures(token)
            .ok_or_else(|| format!("Unrecognized selection token: '{}'", token))?;
        let start: usize = caps[1]
            .parse()
            .map_err(|_| format!("Index out of range: '{}'", token))?;
        let end: usize = match caps.get(2) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| format!("Index out of range: '{}'", token))?,
            None => start,
        };
        if start == 0 || end < start || end > field_count {
            return Err(format!(
                "Selection '{}' is outside 1..{}",
                token, field_count
            ));
        }
        for index in start..=end {
            picked.insert(index - 1);
        }
    }

    if picked.is_empty() {
        return Ok(ParsedSelection::Cancel);
    }
    Ok(ParsedSelection::Indices(picked.into_iter().collect()))
}

/// Interactive selector reading from stdin. The prompt loops on invalid
/// input; EOF counts as cancellation, the same as closing a dialog.
pub struct ConsoleFieldSelector;

impl ConsoleFieldSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleFieldSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSelector for ConsoleFieldSelector {
    fn select(
        &self,
        class_name: &str,
        fields: &[FieldDeclaration],
    ) -> Result<SelectionResult, AppError> {
        println!();
        println!("{} {}", "Select fields of".bold(), class_name.bold().green());
        if fields.is_empty() {
            println!("  {}", "(no fields)".dimmed());
        }
        for (i, field) in fields.iter().enumerate() {
            match &field.doc_comment {
                Some(doc) => println!(
                    "  [{}] {}  {}",
                    i + 1,
                    field.presentable(),
                    doc.dimmed()
                ),
                None => println!("  [{}] {}", i + 1, field.presentable()),
            }
        }

        loop {
            print!(
                "{} ",
                "Fields to generate accessors for (e.g. 1,3-5 / all / q):".yellow()
            );
            std::io::stdout()
                .flush()
                .map_err(|e| AppError::IO("flushing selection prompt".to_string(), e))?;

            let mut input = String::new();
            let bytes = std::io::stdin()
                .read_line(&mut input)
                .map_err(|e| AppError::IO("reading selection input".to_string(), e))?;
            if bytes == 0 {
                // EOF closes the prompt without confirming anything.
                return Ok(SelectionResult::Cancelled);
            }

            match parse_selection_input(&input, fields.len()) {
                Ok(ParsedSelection::Cancel) => return Ok(SelectionResult::Cancelled),
                Ok(ParsedSelection::All) => {
                    return Ok(SelectionResult::Confirmed(fields.to_vec()));
                }
                Ok(ParsedSelection::Indices(indices)) => {
                    let chosen = indices.iter().map(|&i| fields[i].clone()).collect();
                    return Ok(SelectionResult::Confirmed(chosen));
                }
                Err(msg) => {
                    println!("{}", msg.red());
                }
            }
        }
    }
}
