mod cli;
mod logging;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use fiscal_week::{CompanyRegistry, DateRange, FiscalCalendar};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{AnnotateArgs, Cli, Command, RangeArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = load_registry(cli.config.as_deref())?;
    let company = registry
        .get(&cli.company)
        .with_context(|| format!("available tickers: {}", registry.tickers().collect::<Vec<_>>().join(", ")))?;
    let calendar = FiscalCalendar::for_company(company);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Command::Annotate(args) => annotate(&calendar, &args, &mut out)?,
        Command::Calendar(args) => {
            if let Some(range) = parse_range(&args)? {
                write_json_lines(&mut out, &calendar.annotate_range(&range))?;
            }
        },
        Command::Weeks(args) => {
            if let Some(range) = parse_range(&args)? {
                let weeks = calendar.weeks_between_inclusive(range.start(), range.end())?;
                for week in weeks {
                    writeln!(out, "{week}")?;
                }
            }
        },
    }
    out.flush().context("failed to flush output")
}

fn load_registry(config: Option<&Path>) -> Result<CompanyRegistry> {
    let mut registry = CompanyRegistry::builtin();
    if let Some(path) = config {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let extra = CompanyRegistry::from_toml_str(&text).with_context(|| format!("failed to load {}", path.display()))?;
        info!(path = %path.display(), "merged company config");
        registry.merge(extra);
    }
    Ok(registry)
}

fn parse_range(args: &RangeArgs) -> Result<Option<DateRange>> {
    let range = DateRange::from_day_first(&args.start, &args.end)
        .with_context(|| format!("invalid range {:?} to {:?}", args.start, args.end))?;
    if range.is_none() {
        debug!("no start date given, nothing to print");
    }
    Ok(range)
}

fn annotate(calendar: &FiscalCalendar, args: &AnnotateArgs, out: &mut impl Write) -> Result<()> {
    let records = calendar.annotate_iso(args.dates.as_slice()).context("invalid date")?;
    write_json_lines(out, &records)
}

fn write_json_lines<T: Serialize>(out: &mut impl Write, rows: &[T]) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row).context("failed to serialize record")?;
        writeln!(out)?;
    }
    Ok(())
}
