use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::{month_cmd, now_cmd};

/// Almanac month arithmetic and clock tool.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Month arithmetic and offset clocks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show calendar facts and arithmetic for a month.
    Month(MonthArgs),
    /// Print the current instant, shifted by the configured offset.
    Now(NowArgs),
}

impl Command {
    /// Dispatches to the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self {
            Command::Month(args) => month_cmd::run(args),
            Command::Now(args) => now_cmd::run(args),
        }
    }
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month ordinal (1-12) or English name.
    pub month: String,

    /// Use leap-year lengths.
    #[arg(long)]
    pub leap: bool,

    /// Number of months to add (may be negative).
    #[arg(long, allow_hyphen_values = true)]
    pub plus: Option<i64>,

    /// Number of months to subtract (may be negative).
    #[arg(long, allow_hyphen_values = true)]
    pub minus: Option<i64>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Path to TOML configuration file (defaults to ./almanac.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the clock offset from config, in seconds.
    #[arg(long = "offset-seconds", allow_hyphen_values = true)]
    pub offset_seconds: Option<i64>,

    /// Report this RFC 3339 instant instead of the system time.
    #[arg(long)]
    pub fixed: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("almanac").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn month_accepts_negative_steps() {
        let cli = parse(&["month", "8", "--plus", "-3", "--minus", "-14", "--leap"]);
        let Command::Month(args) = cli.command else {
            panic!("expected month subcommand");
        };
        assert_eq!(args.month, "8");
        assert_eq!(args.plus, Some(-3));
        assert_eq!(args.minus, Some(-14));
        assert!(args.leap);
        assert!(!args.json);
    }

    #[test]
    fn now_flags() {
        let cli = parse(&[
            "-vv",
            "now",
            "--offset-seconds",
            "-30",
            "--fixed",
            "2024-02-29T12:00:00Z",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Now(args) = cli.command else {
            panic!("expected now subcommand");
        };
        assert_eq!(args.offset_seconds, Some(-30));
        assert_eq!(
            args.fixed.unwrap().to_rfc3339(),
            "2024-02-29T12:00:00+00:00"
        );
        assert!(args.config.is_none());
    }

    #[test]
    fn month_requires_argument() {
        assert!(Cli::try_parse_from(["almanac", "month"]).is_err());
    }

    #[test]
    fn dispatch_reports_bad_month() {
        let err = parse(&["month", "0"]).command.run().unwrap_err();
        assert!(format!("{err:#}").contains("invalid month: 0"));
    }
}
