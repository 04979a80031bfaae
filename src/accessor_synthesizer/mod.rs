// src/accessor_synthesizer/mod.rs
//
// Turns one selected field into getter/setter source text with Japanese
// Javadoc derived from the field's own doc comment (or its name).

use crate::errors::SynthesisError;
use crate::java_analyzer::FieldDeclaration;

/// Generated text for one getter/setter pair, tied to exactly one field.
/// Both methods are inserted together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorPair {
    pub field_name: String,
    pub getter_name: String,
    pub setter_name: String,
    pub getter: String,
    pub setter: String,
}

/// Uppercases the first character of a field name, leaving the rest as is.
/// Characters whose uppercase form expands to several characters (such as
/// `ß`) stay unchanged, so the result always has the same character count
/// as the input. An empty name is a synthesis error, never a panic.
pub fn capitalize(name: &str, class_name: &str) -> Result<String, SynthesisError> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut mapping = first.to_uppercase();
            let upper = match (mapping.next(), mapping.next()) {
                (Some(c), None) => c,
                _ => first,
            };
            Ok(upper.to_string() + chars.as_str())
        }
        None => Err(SynthesisError::EmptyFieldName {
            class_name: class_name.to_string(),
        }),
    }
}

/// Derives the Javadoc body text for a field: the interior of its doc
/// comment (one leading `/**` and one trailing `*/` stripped, trimmed), or
/// the plain field name when no doc comment exists. Interior `*` characters
/// survive verbatim.
pub fn extract_doc_text(field: &FieldDeclaration) -> String {
    match &field.doc_comment {
        Some(comment) => {
            let inner = comment.strip_prefix("/**").unwrap_or(comment);
            let inner = inner.strip_suffix("*/").unwrap_or(inner);
            inner.trim().to_string()
        }
        None => field.name.clone(),
    }
}

/// Synthesizes the getter and setter text for one field.
///
/// Getter name is `is` + Name only for the primitive `boolean` type,
/// otherwise `get` + Name; setter name is always `set` + Name. The templates
/// are emitted at column 0; the source editor indents on insertion.
pub fn synthesize(
    field: &FieldDeclaration,
    class_name: &str,
) -> Result<AccessorPair, SynthesisError> {
    let capitalized = capitalize(&field.name, class_name)?;
    let doc_text = extract_doc_text(field);

    let getter_prefix = if field.is_primitive_boolean() {
        "is"
    } else {
        "get"
    };
    let getter_name = format!("{}{}", getter_prefix, capitalized);
    let setter_name = format!("set{}", capitalized);

    let getter = format!(
        "/**\n * {doc}の取得\n *\n * @return {doc}\n */\npublic {ty} {name}() {{\n    return {field};\n}}",
        doc = doc_text,
        ty = field.type_name,
        name = getter_name,
        field = field.name,
    );

    // Setter Javadoc stars are deliberately not aligned under the opener.
    let setter = format!(
        "/**\n* {doc}の設定\n*/\npublic void {name}({ty} {field}) {{\n    this.{field} = {field};\n}}",
        doc = doc_text,
        ty = field.type_name,
        name = setter_name,
        field = field.name,
    );

    Ok(AccessorPair {
        field_name: field.name.clone(),
        getter_name,
        setter_name,
        getter,
        setter,
    })
}
