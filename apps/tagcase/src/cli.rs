//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tagcase",
    version,
    about = "Check that JSON struct tag names in Go code are camelCase",
    long_about = "tagcase: lint Go struct tags so every `json` key has no whitespace, no underscores, and starts lowercase.\n\nTargets are package directories, `dir/...` patterns, .go files, or glob patterns. Default: the package in the current directory.\n\nSettings precedence: CLI > environment > defaults.",
    after_help = "Examples:\n  tagcase\n  tagcase ./...\n  tagcase ./models ./api/types.go\n  tagcase --keep-going --output json ./..."
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Packages, files, or patterns to lint (default: .)")]
    pub targets: Vec<String>,
    #[arg(short = 'C', long, help = "Working directory (default: current dir)")]
    pub dir: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human, env: TAGCASE_OUTPUT)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Report unparseable files and keep linting the rest")]
    pub keep_going: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging (env: TAGCASE_LOG)")]
    pub verbose: bool,
}
