use std::fmt;

use crate::{Error, Result};

/// A validated, `/`-separated name such as `billing/invoice`.
///
/// The last segment is the leaf; everything before it is the namespace.
/// There is always at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    segments: Vec<String>,
}

impl Identifier {
    /// Validate a raw name.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::invalid_argument(raw, "name cannot be empty"));
        }
        if raw.ends_with('/') {
            return Err(Error::invalid_argument(raw, "name cannot end with '/'"));
        }

        let segments: Vec<String> = raw.split('/').map(str::to_string).collect();
        for segment in &segments {
            if let Some(reason) = validate_segment(segment) {
                return Err(Error::invalid_argument(raw, reason));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The name exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// All segments, namespace first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment.
    pub fn leaf(&self) -> &str {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }

    /// All segments except the last.
    pub fn namespace(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn validate_segment(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        return Some("name cannot contain empty segments");
    }
    if segment == "." || segment == ".." {
        return Some("name cannot contain '.' or '..' segments");
    }
    if segment.contains('\\') {
        return Some("use '/' to separate namespaces");
    }
    if segment.chars().any(char::is_whitespace) {
        return Some("name cannot contain whitespace");
    }
    None
}
