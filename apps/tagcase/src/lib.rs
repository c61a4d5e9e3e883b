//! Tagcase core library.
//!
//! This crate lints Go struct tags: every `json` key must be camelCase (no
//! whitespace, no underscores, lowercase first character).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Effective settings from CLI flags and environment.
//! - `resolve`: Target specifiers to Go files (`Resolver` trait, `FsResolver`).
//! - `syntax`: Go parsing via tree-sitter and the declaration model.
//! - `extract`: Tagged fields of top-level struct declarations.
//! - `tag`: Struct tag syntax (`key:"value,opt"`).
//! - `policy`: camelCase naming verdicts.
//! - `lint`: The engine tying the stages together.
//! - `models`: Source files, diagnostics, and lint report structs.
//! - `output`: Human/JSON printers and exit codes.
//! - `error`: Fatal error types.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod lint;
pub mod models;
pub mod output;
pub mod policy;
pub mod resolve;
pub mod syntax;
pub mod tag;
pub mod utils;
