//! Struct tag parsing (`key:"value" key2:"value2,opt"`).
//!
//! The scan is permissive: it stops at the first malformed pair and keeps
//! whatever was parsed before it. A key that cannot be found, for whatever
//! reason, is reported as absent.

use crate::syntax::literal::unquote;

/// Tag key holding the serialization name.
pub const SERIALIZATION_KEY: &str = "json";

/// Text before the first comma; the rest are options such as `omitempty`.
pub fn primary(value: &str) -> &str {
    value.split(',').next().unwrap_or(value)
}

/// Ordered `key -> value` pairs of one tag literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTag {
    entries: Vec<(String, String)>,
}

impl ParsedTag {
    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of looking up one key in a raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    Found(String),
    NotFound,
}

pub fn parse_tag(tag: &str) -> ParsedTag {
    let mut entries = Vec::new();
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        let bytes = rest.as_bytes();
        let name_len = bytes
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(bytes.len());
        if name_len == 0 || name_len + 1 >= bytes.len() {
            break;
        }
        if bytes[name_len] != b':' || bytes[name_len + 1] != b'"' {
            break;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        // Scan the quoted value, honoring backslash escapes.
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        let quoted = &rest[..=i];
        rest = &rest[i + 1..];
        let Some(value) = unquote(quoted) else {
            break;
        };
        entries.push((name.to_string(), value));
    }
    ParsedTag { entries }
}

/// Look up `key` and return its primary value (text before the first comma).
pub fn lookup(tag: &str, key: &str) -> TagLookup {
    match parse_tag(tag).get(key) {
        Some(v) => TagLookup::Found(primary(v).to_string()),
        None => TagLookup::NotFound,
    }
}
