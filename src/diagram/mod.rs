//! Mermaid erDiagram rendering.

mod link;

pub use link::{edit_url, encode_pako};

use crate::relation::Relationship;

/// Render an ordered record sequence as a Mermaid erDiagram document.
///
/// One indented line per record, newline-joined under the `erDiagram`
/// header, no trailing newline.
pub fn to_mermaid(records: &[Relationship]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("erDiagram".to_string());

    for record in records {
        lines.push(format!(
            "  {} {} {} : \"{}\"",
            record.from,
            record.cardinality.as_mermaid(),
            record.to,
            camel_to_words(&record.name)
        ));
    }

    lines.join("\n")
}

/// E.g. 'someCamelCase' -> 'some camel case'.
///
/// A word boundary is a lowercase character immediately followed by an
/// uppercase one; consecutive uppercase letters (acronyms) are not split.
/// A name with no boundary is returned unchanged.
fn camel_to_words(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut split = false;

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && chars[i - 1].is_lowercase() && c.is_uppercase() {
            spaced.push(' ');
            split = true;
        }
        spaced.push(c);
    }

    if split {
        spaced.to_lowercase()
    } else {
        name.to_string()
    }
}
