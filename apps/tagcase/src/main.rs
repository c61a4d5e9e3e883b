//! Tagcase CLI binary entry point.
//! Resolves settings, runs the lint engine, and prints results.

use clap::Parser;
use tagcase::cli::Cli;
use tagcase::config::{self, Env};
use tagcase::lint::Linter;
use tagcase::resolve::FsResolver;
use tagcase::{output, utils};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let env = Env::from_process();
    let eff = match config::resolve_effective(
        cli.dir.as_deref(),
        cli.output.as_deref(),
        cli.keep_going,
        cli.verbose,
        &env,
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(!env.no_color), e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&eff.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let linter = Linter::new(FsResolver::new(&eff.cwd)).on_parse_error(eff.parse_errors);
    match linter.run(&cli.targets) {
        Ok(report) => {
            tracing::debug!(
                "{} diagnostic(s) across {} file(s)",
                report.summary.diagnostics,
                report.summary.files
            );
            if let Err(e) = output::print_lint(&report, eff.output, eff.color) {
                eprintln!("{} {}", utils::error_prefix(eff.color), e);
                std::process::exit(2);
            }
            std::process::exit(output::exit_code(&report));
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(eff.color), e);
            std::process::exit(2);
        }
    }
}
