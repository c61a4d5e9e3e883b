//! Effective settings resolution.
//!
//! There is no configuration file. Each setting resolves with precedence
//! CLI > environment > default:
//! - working directory: `--dir` > process cwd
//! - `output`: `--output` > `TAGCASE_OUTPUT` > `human`
//! - parse errors: `--keep-going` > abort
//! - log filter: `TAGCASE_LOG` > `--verbose` (debug) > warn
//! - colors: off when `NO_COLOR` is set or output is JSON

use crate::lint::ParseErrorPolicy;
use crate::models::source::normalize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown output mode \"{0}\" (expected human|json)")]
    UnknownOutput(String),
    #[error("working directory {0} does not exist")]
    MissingDir(String),
    #[error("cannot determine current directory: {0}")]
    Cwd(#[from] std::io::Error),
}

/// Environment variables consulted during resolution.
#[derive(Debug, Default, Clone)]
pub struct Env {
    pub output: Option<String>,
    pub log: Option<String>,
    pub no_color: bool,
}

impl Env {
    pub fn from_process() -> Self {
        Self {
            output: std::env::var("TAGCASE_OUTPUT").ok(),
            log: std::env::var("TAGCASE_LOG").ok(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary.
pub struct Effective {
    pub cwd: PathBuf,
    pub output: OutputMode,
    pub parse_errors: ParseErrorPolicy,
    pub log_filter: String,
    pub color: bool,
}

/// Merge CLI flags, environment, and defaults into `Effective`.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_output: Option<&str>,
    cli_keep_going: bool,
    cli_verbose: bool,
    env: &Env,
) -> Result<Effective, ConfigError> {
    let process_cwd = std::env::current_dir()?;
    let cwd = match cli_dir {
        Some(d) => normalize(&process_cwd.join(d)),
        None => process_cwd,
    };
    if !cwd.is_dir() {
        return Err(ConfigError::MissingDir(cwd.to_string_lossy().to_string()));
    }

    let output = match cli_output.or(env.output.as_deref()) {
        Some(s) => s.parse()?,
        None => OutputMode::default(),
    };

    let parse_errors = if cli_keep_going {
        ParseErrorPolicy::Continue
    } else {
        ParseErrorPolicy::Abort
    };

    let log_filter = env.log.clone().unwrap_or_else(|| {
        if cli_verbose {
            "tagcase=debug".to_string()
        } else {
            "tagcase=warn".to_string()
        }
    });

    Ok(Effective {
        cwd,
        output,
        parse_errors,
        log_filter,
        color: !env.no_color && output != OutputMode::Json,
    })
}
