//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - builds the monitor configuration
//! - runs a scan (or a discovery / deadline lookup)
//! - prints reports and writes the optional JSON export

use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::calendar::{Clock, SystemClock, expectations_for};
use crate::cli::{CheckArgs, Command, ExpectArgs, SiteArgs};
use crate::domain::MonitorConfig;
use crate::error::AppError;
use crate::io::{ScanExport, write_scan_json};

pub mod pipeline;

use pipeline::Monitor;

/// Entry point for the `fundwatch` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is normal.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init_tracing(cli.verbose, cli.quiet)?;

    match cli.command {
        Command::Check(args) => handle_check(args),
        Command::Tickers(args) => handle_tickers(args),
        Command::Expect(args) => handle_expect(args),
    }
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    let monitor = Monitor::from_config(config_from_args(&args.site)?)?;

    let run = if args.tickers.is_empty() {
        monitor.run_scan(args.date)
    } else {
        monitor.run_scan_for(&args.tickers, args.date)
    };

    println!("{}", crate::report::format_scan_header(run.today, run.reports.len()));
    print!("{}", crate::report::format_report_table(&run.reports));
    let failures = crate::report::format_failures(&run.reports);
    if !failures.is_empty() {
        println!("\nFailures:");
        print!("{failures}");
    }
    println!("\n{}", crate::report::format_summary(&run.summary));

    if let Some(path) = &args.json {
        let export = ScanExport::new(run.today, run.started_at, run.reports);
        write_scan_json(path, &export)?;
        info!(path = %path.display(), "wrote scan export");
    }

    Ok(())
}

fn handle_tickers(args: SiteArgs) -> Result<(), AppError> {
    let monitor = Monitor::from_config(config_from_args(&args)?)?;
    for id in monitor.tickers() {
        println!("{id}");
    }
    Ok(())
}

fn handle_expect(args: ExpectArgs) -> Result<(), AppError> {
    let config = MonitorConfig::default();
    let today = args.date.unwrap_or_else(|| SystemClock.today(config.timezone));
    let exp = expectations_for(&args.ticker, today, &config);
    print!("{}", crate::report::format_expectations(&args.ticker, today, &exp));
    Ok(())
}

pub fn config_from_args(args: &SiteArgs) -> Result<MonitorConfig, AppError> {
    if args.workers == 0 {
        return Err(AppError::usage("--workers must be at least 1."));
    }
    if args.timeout_secs == 0 {
        return Err(AppError::usage("--timeout-secs must be at least 1."));
    }
    Ok(MonitorConfig {
        base_url: args.resolved_base_url(),
        page_timeout: Duration::from_secs(args.timeout_secs),
        workers: args.workers,
        ..MonitorConfig::default()
    })
}

/// Rewrite argv so `fundwatch` defaults to `fundwatch check`.
///
/// Leading global flags (`-v`, `-vv`, `-q`, `--verbose`, `--quiet`) are skipped
/// before looking for a subcommand.
///
/// Rules:
/// - `fundwatch`                     -> `fundwatch check`
/// - `fundwatch -v`                  -> `fundwatch -v check`
/// - `fundwatch -t ACDC ...`         -> `fundwatch check -t ACDC ...`
/// - `fundwatch -v tickers`          -> unchanged
/// - `fundwatch --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let first = argv.iter().skip(1).position(|a| !is_global_flag(a)).map(|i| i + 1);
    let Some(idx) = first else {
        argv.push("check".to_string());
        return argv;
    };
    let arg = argv[idx].as_str();

    let is_top_level_help_or_version = matches!(arg, "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg, "check" | "tickers" | "expect");
    if is_subcommand {
        return argv;
    }

    // If the first non-global token is a flag, treat it as "check flags".
    if arg.starts_with('-') {
        argv.insert(idx, "check".to_string());
        return argv;
    }

    argv
}

fn is_global_flag(arg: &str) -> bool {
    if matches!(arg, "--verbose" | "--quiet") {
        return true;
    }
    match arg.strip_prefix('-') {
        Some(short) if !short.is_empty() && !short.starts_with('-') => short.chars().all(|c| c == 'v' || c == 'q'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_check() {
        assert_eq!(rewrite_args(args(&["fundwatch"])), args(&["fundwatch", "check"]));
        assert_eq!(
            rewrite_args(args(&["fundwatch", "-t", "ACDC"])),
            args(&["fundwatch", "check", "-t", "ACDC"])
        );
        assert_eq!(rewrite_args(args(&["fundwatch", "-v"])), args(&["fundwatch", "-v", "check"]));
        assert_eq!(
            rewrite_args(args(&["fundwatch", "-q", "-t", "ACDC"])),
            args(&["fundwatch", "-q", "check", "-t", "ACDC"])
        );
    }

    #[test]
    fn leading_global_flags_keep_the_named_subcommand() {
        assert_eq!(rewrite_args(args(&["fundwatch", "-v", "tickers"])), args(&["fundwatch", "-v", "tickers"]));
        assert_eq!(rewrite_args(args(&["fundwatch", "-q", "check"])), args(&["fundwatch", "-q", "check"]));
        assert_eq!(
            rewrite_args(args(&["fundwatch", "-vv", "--quiet", "expect", "ACDC"])),
            args(&["fundwatch", "-vv", "--quiet", "expect", "ACDC"])
        );

        let cases: [&[&str]; 4] = [
            &["fundwatch", "-v", "tickers"],
            &["fundwatch", "-q", "check"],
            &["fundwatch", "--verbose"],
            &["fundwatch", "-vv", "-t", "ACDC"],
        ];
        for argv in cases {
            let cli = crate::cli::Cli::try_parse_from(rewrite_args(args(argv)));
            assert!(cli.is_ok(), "{argv:?} did not parse");
        }

        let cli = crate::cli::Cli::try_parse_from(rewrite_args(args(&["fundwatch", "-v", "tickers"]))).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Tickers(_)));
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(args(&["fundwatch", "tickers"])), args(&["fundwatch", "tickers"]));
        assert_eq!(rewrite_args(args(&["fundwatch", "--help"])), args(&["fundwatch", "--help"]));
    }

    #[test]
    fn config_rejects_zero_workers() {
        let site = SiteArgs {
            base_url: Some("https://example.test/funds".to_string()),
            timeout_secs: 10,
            workers: 0,
        };
        assert_eq!(config_from_args(&site).unwrap_err().exit_code(), 2);

        let site = SiteArgs { workers: 3, ..site };
        let config = config_from_args(&site).unwrap();
        assert_eq!(config.workers, 3);
        assert_eq!(config.base_url, "https://example.test/funds");
        assert_eq!(config.page_timeout, Duration::from_secs(10));
    }
}
