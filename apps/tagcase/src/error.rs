//! Error types shared by the resolver, the Go parser, and the lint engine.
//!
//! Fatal errors abort a run. Naming violations are never errors; they are
//! collected as `Diagnostic` values by the engine.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A target specifier could not be turned into source files.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("cannot find package \"{0}\"")]
    NotFound(String),
    #[error("no Go files in {0}")]
    NoGoFiles(String),
    #[error("\"{0}\" is not a Go source file")]
    NotGoFile(String),
    #[error("invalid pattern \"{pattern}\": {message}")]
    Pattern { pattern: String, message: String },
    #[error("pattern \"{0}\" matched no Go files")]
    NoMatch(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Position-tagged syntax error found while parsing a Go file.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{line}:{column}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// A source file failed to parse.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{file}:{}:{}: {}", .error.line, .error.column, .error.message)]
pub struct ParseError {
    pub file: String,
    pub error: SyntaxError,
}

/// Anything that aborts a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot load the Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_renders_file_line_col() {
        let err = ParseError {
            file: "./a.go".into(),
            error: SyntaxError {
                line: 3,
                column: 7,
                message: "expected type, found '}'".into(),
            },
        };
        assert_eq!(err.to_string(), "./a.go:3:7: expected type, found '}'");
        let wrapped: LintError = err.into();
        assert_eq!(wrapped.to_string(), "./a.go:3:7: expected type, found '}'");
    }
}
