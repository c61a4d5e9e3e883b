//! Lint runner: resolve targets, parse files, check tag names.
//!
//! Files are parsed in parallel, but results are gathered in resolver order so
//! diagnostics (and the first fatal error) are deterministic.

use crate::error::{LintError, ParseError};
use crate::extract::tagged_fields;
use crate::models::{Diagnostic, LintReport, SourceFile, Summary};
use crate::policy;
use crate::resolve::Resolver;
use crate::syntax::{self, ast::SourceUnit};
use crate::tag::{lookup, TagLookup, SERIALIZATION_KEY};
use rayon::prelude::*;

/// What to do when a file does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseErrorPolicy {
    /// Stop the run on the first unparseable file (in resolver order).
    #[default]
    Abort,
    /// Record the file as skipped and keep linting the rest.
    Continue,
}

pub struct Linter<R> {
    resolver: R,
    on_parse_error: ParseErrorPolicy,
}

impl<R: Resolver> Linter<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            on_parse_error: ParseErrorPolicy::default(),
        }
    }

    pub fn on_parse_error(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }

    /// Lint every file the specifiers resolve to.
    pub fn run(&self, specifiers: &[String]) -> Result<LintReport, LintError> {
        let files = self.resolver.resolve(specifiers)?;
        tracing::debug!("linting {} file(s)", files.len());

        let per_file: Vec<Result<Vec<Diagnostic>, LintError>> =
            files.par_iter().map(lint_file).collect();

        let mut diagnostics = Vec::new();
        let mut skipped: Vec<ParseError> = Vec::new();
        for result in per_file {
            match result {
                Ok(mut found) => diagnostics.append(&mut found),
                Err(LintError::Parse(err)) if self.on_parse_error == ParseErrorPolicy::Continue => {
                    tracing::debug!("skipping unparseable file {}", err.file);
                    skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }
        let summary = Summary {
            diagnostics: diagnostics.len(),
            files: files.len() - skipped.len(),
            skipped: skipped.len(),
        };
        Ok(LintReport {
            diagnostics,
            skipped,
            summary,
        })
    }
}

/// Read, parse, and lint one file.
pub fn lint_file(file: &SourceFile) -> Result<Vec<Diagnostic>, LintError> {
    tracing::trace!("parsing {}", file.display);
    let unit = syntax::parse_file(file)?;
    Ok(lint_unit(&file.display, &unit))
}

/// Diagnostics for one parsed file, in field order.
pub fn lint_unit(display: &str, unit: &SourceUnit) -> Vec<Diagnostic> {
    tagged_fields(unit)
        .filter_map(|field| {
            let TagLookup::Found(value) = lookup(&field.tag, SERIALIZATION_KEY) else {
                return None;
            };
            let verdict = policy::check(&value);
            Diagnostic::from_verdict(display, &field, &value, verdict)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolutionError;
    use crate::resolve::FsResolver;
    use crate::syntax::parse_str;
    use std::fs;
    use tempfile::tempdir;

    fn lint_src(src: &str) -> Vec<String> {
        let unit = parse_str(src).unwrap();
        lint_unit("./x.go", &unit)
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn test_scenarios() {
        let src = "package p\n\ntype T struct {\n\
                   \tA string `json:\"user_name\"`\n\
                   \tB string `json:\"UserName\"`\n\
                   \tC string `json:\"user name\"`\n\
                   \tD string `json:\"userName,omitempty\"`\n\
                   \tE string\n\
                   \tF string `db:\"Bad_Name\"`\n\
                   \tG string `json:\",omitempty\"`\n\
                   }\n";
        assert_eq!(
            lint_src(src),
            vec![
                "./x.go:4: \"user_name\" is not camelcase",
                "./x.go:5: \"UserName\" is not camelcase",
                "./x.go:6: \"user name\" contains whitespace",
            ]
        );
    }

    #[test]
    fn test_malformed_tag_is_skipped() {
        let src = "package p\ntype T struct {\n\tA int `json:Bad_Name`\n\tB int `json:\"Ok\"`\n}\n";
        assert_eq!(lint_src(src), vec!["./x.go:4: \"Ok\" is not camelcase"]);
    }

    /// Resolver returning a fixed file list.
    struct Fixed(Vec<SourceFile>);

    impl Resolver for Fixed {
        fn resolve(&self, _: &[String]) -> Result<Vec<SourceFile>, ResolutionError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Resolver for Failing {
        fn resolve(&self, specifiers: &[String]) -> Result<Vec<SourceFile>, ResolutionError> {
            Err(ResolutionError::NotFound(specifiers.join(" ")))
        }
    }

    fn write_files(root: &std::path::Path, files: &[(&str, &str)]) -> Vec<SourceFile> {
        files
            .iter()
            .map(|(name, body)| {
                fs::write(root.join(name), body).unwrap();
                SourceFile::new(std::path::Path::new(name), root)
            })
            .collect()
    }

    const BAD_TAGS: &str = "package p\ntype A struct {\n\tX int `json:\"X\"`\n\tY int `json:\"y_y\"`\n}\n";
    const BROKEN: &str = "package p\ntype B struct {\n";

    #[test]
    fn test_order_follows_resolver_then_source() {
        let dir = tempdir().unwrap();
        let files = write_files(
            dir.path(),
            &[("z.go", BAD_TAGS), ("a.go", "package p\ntype C struct{ Q int `json:\"Q\"` }\n")],
        );
        let report = Linter::new(Fixed(files)).run(&[]).unwrap();
        let lines: Vec<String> = report.diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "./z.go:3: \"X\" is not camelcase",
                "./z.go:4: \"y_y\" is not camelcase",
                "./a.go:2: \"Q\" is not camelcase",
            ]
        );
        assert_eq!(report.summary.files, 2);

        // Same input, same output.
        let again = Linter::new(Fixed(report_files(dir.path()))).run(&[]).unwrap();
        assert_eq!(again.diagnostics, report.diagnostics);
    }

    fn report_files(root: &std::path::Path) -> Vec<SourceFile> {
        ["z.go", "a.go"]
            .iter()
            .map(|n| SourceFile::new(std::path::Path::new(n), root))
            .collect()
    }

    #[test]
    fn test_parse_error_aborts_by_default() {
        let dir = tempdir().unwrap();
        let files = write_files(dir.path(), &[("good.go", BAD_TAGS), ("bad.go", BROKEN)]);
        let err = Linter::new(Fixed(files)).run(&[]).unwrap_err();
        match err {
            LintError::Parse(p) => assert_eq!(p.file, "./bad.go"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_body_syntax_error_aborts() {
        let dir = tempdir().unwrap();
        let files = write_files(
            dir.path(),
            &[
                ("a.go", BAD_TAGS),
                (
                    "b.go",
                    "package p\n\nfunc f() {\n\tx := := 1\n}\n\ntype T struct {\n\tA int `json:\"A\"`\n}\n",
                ),
            ],
        );
        let err = Linter::new(Fixed(files)).run(&[]).unwrap_err();
        assert!(matches!(err, LintError::Parse(ref p) if p.file == "./b.go"));
    }

    #[test]
    fn test_dangling_initializer_does_not_swallow_struct() {
        let dir = tempdir().unwrap();
        let files = write_files(
            dir.path(),
            &[(
                "v.go",
                "package p\n\nvar v = 1 +\n\ntype T struct {\n\tA int `json:\"A\"`\n}\n",
            )],
        );
        let err = Linter::new(Fixed(files)).run(&[]).unwrap_err();
        assert!(matches!(err, LintError::Parse(_)));
    }

    #[test]
    fn test_parse_error_continue_policy_collects_skipped() {
        let dir = tempdir().unwrap();
        let files = write_files(dir.path(), &[("bad.go", BROKEN), ("good.go", BAD_TAGS)]);
        let report = Linter::new(Fixed(files))
            .on_parse_error(ParseErrorPolicy::Continue)
            .run(&[])
            .unwrap();
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "./bad.go");
        assert_eq!(report.summary.files, 1);
    }

    #[test]
    fn test_resolution_error_is_fatal() {
        let err = Linter::new(Failing).run(&["nope".into()]).unwrap_err();
        assert!(matches!(err, LintError::Resolution(_)));
    }

    #[test]
    fn test_fs_resolver_end_to_end() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("models")).unwrap();
        fs::write(
            dir.path().join("models/user.go"),
            "package models\n\ntype User struct {\n\tID int `json:\"id\"`\n\tName string `json:\"Name\"`\n}\n",
        )
        .unwrap();
        let report = Linter::new(FsResolver::new(dir.path()))
            .run(&["./...".into()])
            .unwrap();
        assert_eq!(
            report.diagnostics[0].to_string(),
            "./models/user.go:5: \"Name\" is not camelcase"
        );
    }
}
