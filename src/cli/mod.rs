//! Command-line parsing for the fund freshness monitor.
//!
//! Argument parsing and command dispatch stay separate from the scan code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DEFAULT_BASE_URL, DEFAULT_WORKERS, FundId};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "fundwatch",
    version,
    about = "Checks fund pages for stale NAV, performance, holdings and distribution dates"
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one scan and print the freshness table.
    Check(CheckArgs),
    /// Print the ticker set a scan would cover.
    Tickers(SiteArgs),
    /// Print the publication deadlines for one fund.
    Expect(ExpectArgs),
}

/// Where and how to fetch.
#[derive(Debug, Parser, Clone)]
pub struct SiteArgs {
    /// Fund pages live at `<BASE_URL>/<ticker>/`. Defaults to $FUNDWATCH_BASE_URL if set.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-page fetch timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Number of funds fetched in parallel.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,
}

impl SiteArgs {
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| std::env::var("FUNDWATCH_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

#[derive(Debug, Parser, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Scan only these tickers instead of discovering them (comma separated or repeated).
    #[arg(short = 't', long = "ticker", value_delimiter = ',')]
    pub tickers: Vec<FundId>,

    /// Evaluate as if today were this date (YYYY-MM-DD). Defaults to today in Sydney.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Also write the reports to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ExpectArgs {
    /// Fund ticker, e.g. ACDC.
    pub ticker: FundId,

    /// Evaluate as if today were this date (YYYY-MM-DD). Defaults to today in Sydney.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_tickers_and_date() {
        let cli = Cli::parse_from([
            "fundwatch", "check", "-t", "acdc,bank", "--ticker", "usig", "--date", "2025-11-25", "--workers", "4",
        ]);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        let tickers: Vec<&str> = args.tickers.iter().map(|t| t.as_str()).collect();
        assert_eq!(tickers, vec!["ACDC", "BANK", "USIG"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 11, 25));
        assert_eq!(args.site.workers, 4);
        assert_eq!(args.site.timeout_secs, 10);
    }

    #[test]
    fn rejects_malformed_ticker() {
        assert!(Cli::try_parse_from(["fundwatch", "expect", "AC/DC"]).is_err());
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::parse_from(["fundwatch", "tickers", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
