//! Target resolution: turns specifiers into the list of Go files to lint.
//!
//! The engine depends only on the [`Resolver`] trait. [`FsResolver`] walks the
//! filesystem the way the Go tool treats package paths:
//! - `dir` lints the package in `dir` (non-test `.go` files)
//! - `dir/...` lints every package below `dir`
//! - `file.go` lints one file
//! - glob patterns (`models/*.go`, `cmd/*`) expand via `glob`

use crate::error::ResolutionError;
use crate::models::source::normalize;
use crate::models::SourceFile;
use glob::{glob_with, MatchOptions, Pattern};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Source of files to lint.
pub trait Resolver {
    fn resolve(&self, specifiers: &[String]) -> Result<Vec<SourceFile>, ResolutionError>;
}

/// Filesystem resolver rooted at a working directory.
pub struct FsResolver {
    cwd: PathBuf,
}

const SKIPPED_DIRS: &[&str] = &["testdata", "vendor"];

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

impl FsResolver {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    fn resolve_one(&self, spec: &str) -> Result<Vec<PathBuf>, ResolutionError> {
        if spec == "..." || spec.ends_with("/...") {
            let base = spec.strip_suffix("...").unwrap_or(spec);
            let base = if base.is_empty() { "." } else { base };
            return self.resolve_recursive(spec, &normalize(&self.cwd.join(base)));
        }
        if spec.contains(['*', '?', '[']) {
            return self.resolve_glob(spec);
        }
        let path = normalize(&self.cwd.join(spec));
        if path.is_dir() {
            let files = package_files(&path)?;
            if files.is_empty() {
                return Err(ResolutionError::NoGoFiles(spec.to_string()));
            }
            return Ok(files);
        }
        if path.is_file() {
            if !spec.ends_with(".go") {
                return Err(ResolutionError::NotGoFile(spec.to_string()));
            }
            return Ok(vec![path]);
        }
        Err(ResolutionError::NotFound(spec.to_string()))
    }

    fn resolve_recursive(&self, spec: &str, base: &Path) -> Result<Vec<PathBuf>, ResolutionError> {
        if !base.is_dir() {
            return Err(ResolutionError::NotFound(spec.to_string()));
        }
        let pattern = format!("{}/**/*.go", Pattern::escape(&base.to_string_lossy()));
        let entries = glob_with(&pattern, match_options()).map_err(|e| ResolutionError::Pattern {
            pattern: spec.to_string(),
            message: e.to_string(),
        })?;
        // Packages in directory order, files sorted within each package.
        let mut packages: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for entry in entries {
            let path = match entry {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                    continue;
                }
            };
            let Ok(rel) = path.strip_prefix(base) else {
                continue;
            };
            let in_skipped_dir = rel
                .parent()
                .is_some_and(|dir| dir.components().any(|c| is_skipped_dir(c.as_os_str())));
            if in_skipped_dir || !is_package_file(&path) {
                continue;
            }
            let dir = rel.parent().map(Path::to_path_buf).unwrap_or_default();
            packages.entry(dir).or_default().push(path);
        }
        if packages.is_empty() {
            tracing::warn!("\"{}\" matched no packages", spec);
        }
        Ok(packages
            .into_values()
            .flat_map(|mut files| {
                files.sort();
                files
            })
            .collect())
    }

    fn resolve_glob(&self, spec: &str) -> Result<Vec<PathBuf>, ResolutionError> {
        let pattern = if Path::new(spec).is_absolute() {
            spec.to_string()
        } else {
            let rel = spec.trim_start_matches("./");
            format!("{}/{}", Pattern::escape(&self.cwd.to_string_lossy()), rel)
        };
        let entries = glob_with(&pattern, match_options()).map_err(|e| {
            ResolutionError::Pattern {
                pattern: spec.to_string(),
                message: e.to_string(),
            }
        })?;
        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(p) if p.is_dir() => files.extend(package_files(&p)?),
                Ok(p) if is_package_file(&p) => files.push(p),
                Ok(_) => {}
                Err(e) => tracing::warn!("glob error: {}", e),
            }
        }
        if files.is_empty() {
            return Err(ResolutionError::NoMatch(spec.to_string()));
        }
        Ok(files)
    }
}

impl Resolver for FsResolver {
    fn resolve(&self, specifiers: &[String]) -> Result<Vec<SourceFile>, ResolutionError> {
        let default = [".".to_string()];
        let specs = if specifiers.is_empty() {
            &default[..]
        } else {
            specifiers
        };
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut out = Vec::new();
        for spec in specs {
            let paths = self.resolve_one(spec)?;
            tracing::debug!("{} resolved to {} file(s)", spec, paths.len());
            for p in paths {
                let file = SourceFile::new(&p, &self.cwd);
                if seen.insert(file.path.clone()) {
                    out.push(file);
                }
            }
        }
        Ok(out)
    }
}

fn is_skipped_dir(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn is_package_file(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    path.is_file()
        && name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('.')
        && !name.starts_with('_')
}

/// Non-test Go files directly inside `dir`, sorted by name.
fn package_files(dir: &Path) -> Result<Vec<PathBuf>, ResolutionError> {
    let pattern = format!("{}/*.go", Pattern::escape(&dir.to_string_lossy()));
    let entries = glob_with(&pattern, match_options()).map_err(|e| ResolutionError::Pattern {
        pattern: dir.to_string_lossy().to_string(),
        message: e.to_string(),
    })?;
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) if is_package_file(&p) => files.push(p),
            Ok(_) => {}
            Err(e) => {
                return Err(ResolutionError::Io {
                    path: e.path().to_string_lossy().to_string(),
                    source: e.into_error(),
                })
            }
        }
    }
    files.sort();
    Ok(files)
}
