//! Validation utilities for configured roots and package names

use std::path::{Component, Path};

use miette::SourceSpan;

/// Go reserved keywords that cannot be used as package names
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check if a name is a Go reserved keyword
pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find the span of a string value in the TOML source.
///
/// Looks for the quoted value (`"value"` or `'value'`) and returns the span of
/// the text between the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate a root directory.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_root(root: &str) -> Option<&'static str> {
    if root.trim().is_empty() {
        return Some("root cannot be empty");
    }

    let path = Path::new(root);
    if path.has_root() || path.is_absolute() {
        return Some("root must be relative to the project directory");
    }

    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir | Component::ParentDir => {
                return Some("root cannot contain '.' or '..' segments");
            }
            Component::RootDir | Component::Prefix(_) => {
                return Some("root must be relative to the project directory");
            }
        }
    }

    None
}

/// Validate a Go package name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_package(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("package name cannot be empty");
    }

    if is_go_keyword(name) {
        return Some("package name is a Go reserved keyword");
    }

    let mut chars = name.chars();

    // First character must be a lower-case letter
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return Some("package name must start with a lower-case letter"),
    }

    if chars.any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')) {
        return Some("package name contains invalid characters");
    }

    None
}
