//! Go source parsing on top of `tree-sitter-go`.
//!
//! A file is accepted only when the whole tree is free of error and missing
//! nodes and every top-level item is a declaration. The accepted tree is then
//! lowered into the small [`ast`] model the linter walks.

pub mod ast;
pub mod literal;
mod lower;

use crate::error::{LintError, ParseError, SyntaxError};
use crate::models::SourceFile;
use ast::SourceUnit;
use std::fs;
use tree_sitter::{Node, Parser};

/// Items allowed after the package clause and imports.
const DECLARATIONS: &[&str] = &[
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "var_declaration",
    "const_declaration",
];

pub struct GoParser {
    inner: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, LintError> {
        let mut inner = Parser::new();
        inner.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { inner })
    }

    /// Parse one file. A syntax error anywhere, function bodies included,
    /// fails the whole file.
    pub fn parse(&mut self, src: &str) -> Result<SourceUnit, SyntaxError> {
        let tree = self.inner.parse(src, None).ok_or_else(|| SyntaxError {
            line: 1,
            column: 1,
            message: "parse was cancelled".to_string(),
        })?;
        let root = tree.root_node();
        if let Some(node) = first_error(root) {
            return Err(error_at(node, error_message(node, src)));
        }
        check_top_level(root, src)?;
        Ok(lower::source_unit(root, src))
    }
}

/// Read and parse one resolved file. Syntax errors carry the display path.
pub fn parse_file(file: &SourceFile) -> Result<SourceUnit, LintError> {
    let src = fs::read_to_string(&file.path).map_err(|source| LintError::Io {
        path: file.path.clone(),
        source,
    })?;
    let mut parser = GoParser::new()?;
    parser.parse(&src).map_err(|error| {
        LintError::Parse(ParseError {
            file: file.display.clone(),
            error,
        })
    })
}

pub(crate) fn text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.byte_range()).unwrap_or_default()
}

/// First error or missing node in document order.
fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

fn error_message(node: Node<'_>, src: &str) -> String {
    if node.is_missing() {
        let what = if node.is_named() {
            node.kind().replace('_', " ")
        } else {
            format!("'{}'", node.kind())
        };
        return format!("expected {}", what);
    }
    format!("syntax error: unexpected {}", describe(node, src))
}

/// The first token of `node`, quoted, for error messages.
fn describe(node: Node<'_>, src: &str) -> String {
    let mut leaf = node;
    while let Some(child) = leaf.child(0) {
        leaf = child;
    }
    let token: String = text(leaf, src)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .chars()
        .take(24)
        .collect();
    if token.is_empty() {
        "EOF".to_string()
    } else {
        format!("'{}'", token)
    }
}

fn check_top_level(root: Node<'_>, src: &str) -> Result<(), SyntaxError> {
    let mut cursor = root.walk();
    let mut items = root
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment");
    match items.next() {
        Some(n) if n.kind() == "package_clause" => {}
        Some(n) => {
            let msg = format!("expected 'package', found {}", describe(n, src));
            return Err(error_at(n, msg));
        }
        None => return Err(error_at(root, "expected 'package', found EOF".to_string())),
    }
    let mut seen_decl = false;
    for node in items {
        match node.kind() {
            "import_declaration" if seen_decl => {
                return Err(error_at(
                    node,
                    "imports must appear before other declarations".to_string(),
                ))
            }
            "import_declaration" => {}
            kind if DECLARATIONS.contains(&kind) => seen_decl = true,
            _ => {
                return Err(error_at(
                    node,
                    "non-declaration statement outside function body".to_string(),
                ))
            }
        }
    }
    Ok(())
}

fn error_at(node: Node<'_>, message: String) -> SyntaxError {
    let pos = node.start_position();
    SyntaxError {
        line: pos.row + 1,
        column: pos.column + 1,
        message,
    }
}

#[cfg(test)]
pub(crate) fn parse_str(src: &str) -> Result<SourceUnit, SyntaxError> {
    GoParser::new().unwrap().parse(src)
}
