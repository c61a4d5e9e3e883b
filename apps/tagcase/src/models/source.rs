//! Resolved source files.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Absolute, lexically normalized path.
    pub path: PathBuf,
    /// Path shown in diagnostics: `./<relative>` under the working
    /// directory, absolute otherwise.
    pub display: String,
}

impl SourceFile {
    pub fn new(path: &Path, cwd: &Path) -> Self {
        let abs = normalize(&cwd.join(path));
        let display = match abs.strip_prefix(normalize(cwd)) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => format!("./{}", rel.to_string_lossy()),
            Err(_) => abs.to_string_lossy().to_string(),
        };
        Self { path: abs, display }
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(comp);
                }
            }
            other => out.push(other),
        }
    }
    out
}
