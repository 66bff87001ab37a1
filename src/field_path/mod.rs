//! Field paths for editable content
//!
//! Every rendered leaf is addressed by a path built mechanically while
//! walking the section configuration:
//! - record traversal appends `.key` (no prefix at the root)
//! - sequence traversal appends `[index]` (zero-based)
//!
//! e.g. `stats[1].label`, `plans[2].features[3]`.

mod walk;

pub use walk::leaves;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors while parsing a path string read back from markup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty field path")]
    Empty,

    #[error("empty key at offset {0}")]
    EmptyKey(usize),

    #[error("unterminated index at offset {0}")]
    UnterminatedIndex(usize),

    #[error("invalid index '{index}' at offset {offset}")]
    InvalidIndex { index: String, offset: usize },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Address of one node within a section configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The section root (renders as an empty string)
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a record field below this one
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Path to a sequence element below this one
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The top-level key this path lives under, if it starts with a key
    pub fn top_level_key(&self) -> Option<&str> {
        match self.segments.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }

    /// Everything after the first segment, relative to that node
    pub fn tail(&self) -> Self {
        Self {
            segments: self.segments.iter().skip(1).cloned().collect(),
        }
    }

    /// Same prefix, different final key (label path → href path)
    pub fn sibling(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Resolve this path against a configuration tree
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        resolve(value, self)
    }
}

/// Whether `key` survives a print/parse round trip as a path segment.
///
/// Empty keys and keys containing `.`, `[` or `]` cannot be addressed.
pub fn is_addressable(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']'])
}

/// Walk records by key and sequences by index
pub fn resolve<'a>(value: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = value;
    for segment in &path.segments {
        current = match segment {
            PathSegment::Key(key) => current.as_object()?.get(key)?,
            PathSegment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`resolve`], used by the edit channel
pub(crate) fn resolve_mut<'a>(value: &'a mut Value, path: &FieldPath) -> Option<&'a mut Value> {
    let mut current = value;
    for segment in &path.segments {
        current = match segment {
            PathSegment::Key(key) => current.as_object_mut()?.get_mut(key)?,
            PathSegment::Index(index) => current.as_array_mut()?.get_mut(*index)?,
        };
    }
    Some(current)
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let bytes = s.as_bytes();
        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b'[' => {
                    let start = pos + 1;
                    let end = s[start..]
                        .find(']')
                        .map(|offset| start + offset)
                        .ok_or(PathError::UnterminatedIndex(pos))?;
                    let raw = &s[start..end];
                    let index = raw
                        .parse::<usize>()
                        .ok()
                        .filter(|_| raw.bytes().all(|b| b.is_ascii_digit()))
                        .ok_or_else(|| PathError::InvalidIndex {
                            index: raw.to_string(),
                            offset: start,
                        })?;
                    segments.push(PathSegment::Index(index));
                    pos = end + 1;
                }
                b'.' if !segments.is_empty() => {
                    pos += 1;
                    pos = read_key(s, pos, &mut segments)?;
                }
                b'.' | b']' => {
                    return Err(PathError::UnexpectedChar {
                        ch: bytes[pos] as char,
                        offset: pos,
                    });
                }
                _ if segments.is_empty() => {
                    pos = read_key(s, pos, &mut segments)?;
                }
                _ => {
                    let ch = s[pos..].chars().next().unwrap_or('?');
                    return Err(PathError::UnexpectedChar { ch, offset: pos });
                }
            }
        }

        Ok(Self { segments })
    }
}

/// Read a key starting at `start`; returns the offset just past it
fn read_key(s: &str, start: usize, segments: &mut Vec<PathSegment>) -> Result<usize, PathError> {
    let end = s[start..]
        .find(['.', '[', ']'])
        .map(|offset| start + offset)
        .unwrap_or(s.len());
    if end == start {
        return Err(PathError::EmptyKey(start));
    }
    segments.push(PathSegment::Key(s[start..end].to_string()));
    Ok(end)
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which part of an element a path drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    /// Displayed text
    Text,
    /// Navigation destination of an interactive element
    Href,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(s: &str) -> FieldPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_display() {
        let path = FieldPath::root().key("plans").index(2).key("features").index(3);
        assert_eq!(path.to_string(), "plans[2].features[3]");
        assert_eq!(FieldPath::root().key("title").to_string(), "title");
        assert_eq!(FieldPath::root().to_string(), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(p("stats[1].label"), FieldPath::root().key("stats").index(1).key("label"));
        assert_eq!(p("features[0]"), FieldPath::root().key("features").index(0));
        assert_eq!(p("[0].name"), FieldPath::root().index(0).key("name"));
        assert_eq!(p("a[1][2]"), FieldPath::root().key("a").index(1).index(2));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<FieldPath>(), Err(PathError::Empty));
        assert_eq!(
            ".title".parse::<FieldPath>(),
            Err(PathError::UnexpectedChar { ch: '.', offset: 0 })
        );
        assert_eq!("a..b".parse::<FieldPath>(), Err(PathError::EmptyKey(2)));
        assert_eq!("a[1".parse::<FieldPath>(), Err(PathError::UnterminatedIndex(1)));
        assert!(matches!("a[x]".parse::<FieldPath>(), Err(PathError::InvalidIndex { .. })));
        assert!(matches!("a[-1]".parse::<FieldPath>(), Err(PathError::InvalidIndex { .. })));
        assert!(matches!("a[+1]".parse::<FieldPath>(), Err(PathError::InvalidIndex { .. })));
        assert!(matches!("a[0]b".parse::<FieldPath>(), Err(PathError::UnexpectedChar { .. })));
        assert!(matches!("a]".parse::<FieldPath>(), Err(PathError::UnexpectedChar { .. })));
    }

    #[test]
    fn test_resolve() {
        let config = json!({
            "stats": [
                {"label": "Deployments", "value": "10M+"},
                {"label": "Uptime", "value": "99.9%"}
            ]
        });
        assert_eq!(p("stats[1].label").resolve(&config), Some(&json!("Uptime")));
        assert_eq!(p("stats[2].label").resolve(&config), None);
        assert_eq!(p("stats.label").resolve(&config), None);
        assert_eq!(FieldPath::root().resolve(&config), Some(&config));
    }

    #[test]
    fn test_sibling_shares_prefix() {
        let label = p("plans[2].ctaText");
        assert_eq!(label.sibling("ctaHref").to_string(), "plans[2].ctaHref");
        assert_eq!(label.top_level_key(), Some("plans"));
    }

    #[test]
    fn test_is_addressable() {
        assert!(is_addressable("ctaHref"));
        assert!(is_addressable("with space"));
        assert!(!is_addressable(""));
        assert!(!is_addressable("stats[0].label"));
        assert!(!is_addressable("a.b"));
        assert!(!is_addressable("]"));
    }

    #[test]
    fn test_serde_as_string() {
        let path = p("plans[1].name");
        assert_eq!(serde_json::to_value(&path).unwrap(), json!("plans[1].name"));
        let back: FieldPath = serde_json::from_value(json!("plans[1].name")).unwrap();
        assert_eq!(back, path);
    }
}
