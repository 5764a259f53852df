//! `availability` CLI - compute a shelter animal's weekly availability from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Weekly schedule as JSON (stdin → stdout)
//! cat request.json | availability week
//!
//! # Override the week and opening hours from the request file
//! availability week -i request.json --week-start 2026-03-23 --opening 10:00 --closing 16:00
//!
//! # First range of at least 90 minutes
//! availability first -i request.json --min-minutes 90
//!
//! # Reservations overlapping shelter unavailability
//! availability conflicts -i request.json
//!
//! # One line per day
//! availability summary -i request.json
//! ```

mod log;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shelter_availability::request::{parse_date, parse_time_of_day};
use shelter_availability::{find_conflicts, find_first_available, AvailabilityRequest};
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Weekly availability for shelter animals"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Request source and overrides shared by every subcommand.
#[derive(clap::Args)]
struct RequestArgs {
    /// Input request JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Override the request's week start (YYYY-MM-DD)
    #[arg(long)]
    week_start: Option<String>,
    /// Override the shelter opening time (HH:MM)
    #[arg(long)]
    opening: Option<String>,
    /// Override the shelter closing time (HH:MM)
    #[arg(long)]
    closing: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weekly schedule as JSON
    Week {
        #[command(flatten)]
        request: RequestArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the first available range lasting at least --min-minutes
    First {
        #[command(flatten)]
        request: RequestArgs,
        #[arg(long, default_value_t = 60)]
        min_minutes: i64,
    },
    /// Print reservations that overlap shelter unavailability
    Conflicts {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Print available time per day in a human-readable form
    Summary {
        #[command(flatten)]
        request: RequestArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init_logging(cli.verbose);

    match cli.command {
        Commands::Week {
            request,
            output,
            compact,
        } => {
            let schedule = load_request(&request)?.assemble();
            let json = to_json(&schedule, compact)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::First {
            request,
            min_minutes,
        } => {
            let schedule = load_request(&request)?.assemble();
            let first = find_first_available(&schedule, min_minutes);
            debug!(min_minutes, found = first.is_some(), "first-fit search");
            println!("{}", to_json(&first, false)?);
        }
        Commands::Conflicts { request } => {
            let request = load_request(&request)?;
            let conflicts = find_conflicts(&request.activity, &request.unavailability);
            println!("{}", to_json(&conflicts, false)?);
        }
        Commands::Summary { request } => {
            let schedule = load_request(&request)?.assemble();
            for day in &schedule.days {
                let ranges: Vec<String> = day
                    .available_ranges
                    .iter()
                    .map(|r| format!("{}-{}", r.start.format("%H:%M"), r.end.format("%H:%M")))
                    .collect();
                let ranges = if ranges.is_empty() {
                    "no availability".to_string()
                } else {
                    ranges.join(", ")
                };
                println!(
                    "{} {}  {:>4} min  {}",
                    day.date.format("%a"),
                    day.date,
                    day.available_minutes(),
                    ranges
                );
            }
            println!("Total: {} min", schedule.total_available_minutes());
        }
    }

    Ok(())
}

/// Read and parse the request, then apply command-line overrides.
fn load_request(args: &RequestArgs) -> Result<AvailabilityRequest> {
    let json = read_input(args.input.as_deref())?;
    let mut request =
        AvailabilityRequest::from_json(&json).context("Failed to parse availability request")?;

    if let Some(week_start) = args.week_start.as_deref() {
        request.week_start = parse_date(week_start).context("Invalid --week-start")?;
    }
    if let Some(opening) = args.opening.as_deref() {
        request.opening_time = parse_time_of_day(opening).context("Invalid --opening")?;
    }
    if let Some(closing) = args.closing.as_deref() {
        request.closing_time = parse_time_of_day(closing).context("Invalid --closing")?;
    }

    debug!(
        week_start = %request.week_start,
        opening = %request.opening_time,
        closing = %request.closing_time,
        "loaded request"
    );
    Ok(request)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
