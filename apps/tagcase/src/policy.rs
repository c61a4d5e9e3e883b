//! camelCase naming policy for serialization keys.
//!
//! Rules are evaluated in order and the first failing rule decides:
//! 1. whitespace anywhere in the value
//! 2. an underscore
//! 3. a first character that changes when lowercased
//!
//! Non-letters at the start (digits, `-`, ...) pass rule 3 because lowercasing
//! leaves them unchanged. An empty value passes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Ok,
    ContainsWhitespace,
    NotCamelCase,
}

impl Verdict {
    /// Message suffix for failing verdicts.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Verdict::Ok => None,
            Verdict::ContainsWhitespace => Some("contains whitespace"),
            Verdict::NotCamelCase => Some("is not camelcase"),
        }
    }
}

/// Evaluate a primary tag value (options already stripped).
pub fn check(value: &str) -> Verdict {
    if value.chars().any(char::is_whitespace) {
        return Verdict::ContainsWhitespace;
    }
    if value.contains('_') {
        return Verdict::NotCamelCase;
    }
    match value.chars().next() {
        Some(first) if !first.to_lowercase().eq(std::iter::once(first)) => Verdict::NotCamelCase,
        _ => Verdict::Ok,
    }
}
