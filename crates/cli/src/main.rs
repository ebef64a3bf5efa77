// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod input;
mod output;

use clap::Parser;
use merchant_ring_roster::Roster;
use output::{OutputFormat, View};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use time::{Date, OffsetDateTime};
use tracing::info;

/// Merchant Ring - which shop wagons are trading on a given date
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Date to check (DD-MM-YYYY). Prompts on stdin if not provided.
    #[arg(short, long, value_parser = input::parse_date)]
    date: Option<Date>,

    /// Date whose month anchors the random weekend and week picks. Defaults to today.
    #[arg(long, value_parser = input::parse_date)]
    anchor: Option<Date>,

    /// Seed for the wagons' random schedules, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List every wagon with its open/closed status
    #[arg(long, conflicts_with = "calendar")]
    all: bool,

    /// List every wagon's open days in the month of the date
    #[arg(long)]
    calendar: bool,
}

impl Args {
    const fn view(&self) -> View {
        if self.all {
            View::All
        } else if self.calendar {
            View::Calendar
        } else {
            View::Open
        }
    }

    fn build_roster(&self) -> Result<Roster, merchant_ring_roster::RosterError> {
        let anchor: Date = self
            .anchor
            .unwrap_or_else(|| OffsetDateTime::now_utc().date());
        info!(anchor = %anchor, seed = ?self.seed, "Building wagon roster");

        match self.seed {
            Some(seed) => Roster::builtin(anchor, &mut StdRng::seed_from_u64(seed)),
            None => Roster::builtin(anchor, &mut rand::rng()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Roster phrases are fixed data; a bad one is reported before any prompt.
    let roster: Roster = args.build_roster()?;

    let date: Date = match args.date {
        Some(date) => date,
        None => input::prompt_date(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    info!(date = %date, view = ?args.view(), "Checking wagon availability");

    let mut out = io::stdout().lock();
    output::render(&mut out, &roster, date, args.view(), args.format)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_args_defaults() {
        let args: Args = Args::try_parse_from(["merchant-ring"]).unwrap();
        assert_eq!(args.date, None);
        assert_eq!(args.anchor, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.view(), View::Open);
    }

    #[test]
    fn test_args_parse_dates() {
        let args: Args = Args::try_parse_from([
            "merchant-ring",
            "--date",
            "15-07-2026",
            "--anchor",
            "01-10-2026",
            "--seed",
            "7",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.date, Some(date!(2026 - 07 - 15)));
        assert_eq!(args.anchor, Some(date!(2026 - 10 - 01)));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_args_reject_bad_date() {
        assert!(Args::try_parse_from(["merchant-ring", "--date", "2026-07-15"]).is_err());
    }

    #[test]
    fn test_args_views() {
        let args: Args = Args::try_parse_from(["merchant-ring", "--all"]).unwrap();
        assert_eq!(args.view(), View::All);
        let args: Args = Args::try_parse_from(["merchant-ring", "--calendar"]).unwrap();
        assert_eq!(args.view(), View::Calendar);
        assert!(Args::try_parse_from(["merchant-ring", "--all", "--calendar"]).is_err());
    }

    #[test]
    fn test_seeded_roster_is_reproducible() {
        let args: Args =
            Args::try_parse_from(["merchant-ring", "--anchor", "17-10-2026", "--seed", "3"])
                .unwrap();
        let first: Roster = args.build_roster().unwrap();
        let second: Roster = args.build_roster().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
    }
}
