//! Shared data models for resolved files, diagnostics, and lint output.

pub mod source;

pub use source::SourceFile;

use crate::error::ParseError;
use crate::extract::TaggedField;
use crate::policy::Verdict;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single naming violation tied to the line of a field tag.
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    #[serde(rename = "struct")]
    pub struct_name: String,
    pub field: String,
    pub value: String,
    pub kind: Verdict,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic for a failing verdict; `Verdict::Ok` yields `None`.
    pub fn from_verdict(
        file: &str,
        field: &TaggedField,
        value: &str,
        verdict: Verdict,
    ) -> Option<Self> {
        let reason = verdict.reason()?;
        Some(Self {
            file: file.to_string(),
            line: field.line,
            struct_name: field.struct_name.clone(),
            field: field.field_name.clone(),
            value: value.to_string(),
            kind: verdict,
            message: format!("\"{}\" {}", value, reason),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

#[derive(Debug, Default, Serialize)]
/// Aggregated counts used by printers and the exit decision.
pub struct Summary {
    pub diagnostics: usize,
    pub files: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Serialize)]
/// Lint results container.
pub struct LintReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Files that failed to parse while running with `ParseErrorPolicy::Continue`.
    pub skipped: Vec<ParseError>,
    pub summary: Summary,
}

#[cfg(test)]
pub(crate) fn field_at(line: usize) -> TaggedField {
    TaggedField {
        struct_name: "User".into(),
        field_name: "Name".into(),
        tag: String::new(),
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_lines() {
        let d = Diagnostic::from_verdict("./user.go", &field_at(7), "user_name", Verdict::NotCamelCase)
            .unwrap();
        assert_eq!(d.to_string(), "./user.go:7: \"user_name\" is not camelcase");
        assert_eq!((d.struct_name.as_str(), d.field.as_str()), ("User", "Name"));
        let d = Diagnostic::from_verdict("./user.go", &field_at(8), "user name", Verdict::ContainsWhitespace)
            .unwrap();
        assert_eq!(d.to_string(), "./user.go:8: \"user name\" contains whitespace");
        assert!(Diagnostic::from_verdict("./user.go", &field_at(9), "userName", Verdict::Ok).is_none());
    }
}
