//! Month command: calendar facts and wraparound arithmetic for one month.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use almanac_calendar::Month;

use crate::cli::MonthArgs;

/// Everything the `month` subcommand reports.
#[derive(Debug, Serialize)]
pub struct MonthReport {
    pub month: Month,
    pub ordinal: u8,
    pub leap_year: bool,
    pub min_length: u8,
    pub max_length: u8,
    pub length: u8,
    pub first_day_of_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus: Option<Shift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minus: Option<Shift>,
}

/// Result of stepping a month forward or backward.
#[derive(Debug, Serialize)]
pub struct Shift {
    pub months: i64,
    pub result: Month,
}

/// Run the month report.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let report = build_report(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Parses a month given as an ordinal (`"8"`) or a name (`"August"`).
pub fn parse_month(s: &str) -> Result<Month> {
    match s.trim().parse::<i32>() {
        Ok(ordinal) => Month::of(ordinal).context("month ordinal out of range"),
        Err(_) => s.parse::<Month>().context("not a month ordinal or name"),
    }
}

pub fn build_report(args: &MonthArgs) -> Result<MonthReport> {
    let month = parse_month(&args.month)?;
    debug!(%month, leap_year = args.leap, "building month report");

    Ok(MonthReport {
        month,
        ordinal: month.value(),
        leap_year: args.leap,
        min_length: month.min_length(),
        max_length: month.max_length(),
        length: month.length(args.leap),
        first_day_of_year: month.first_day_of_year(args.leap),
        plus: args.plus.map(|months| Shift {
            months,
            result: month.plus(months),
        }),
        minus: args.minus.map(|months| Shift {
            months,
            result: month.minus(months),
        }),
    })
}

fn render_text(report: &MonthReport) -> String {
    let mut out = format!(
        "{} ({})\n  days:              {} (min {}, max {})\n  first day of year: {}\n",
        report.month,
        report.ordinal,
        report.length,
        report.min_length,
        report.max_length,
        report.first_day_of_year,
    );
    if let Some(shift) = &report.plus {
        out.push_str(&format!("  plus {}:  {}\n", shift.months, shift.result));
    }
    if let Some(shift) = &report.minus {
        out.push_str(&format!("  minus {}: {}\n", shift.months, shift.result));
    }
    out
}
