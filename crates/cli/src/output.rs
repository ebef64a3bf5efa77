// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering of query results as text or JSON.

use clap::ValueEnum;
use merchant_ring_roster::{OpenVendor, Roster, VendorAvailability};
use serde::Serialize;
use std::io::{self, Write};
use time::Date;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per vendor.
    Text,
    /// A JSON array.
    Json,
}

/// Which report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Vendors open on the date.
    Open,
    /// Every vendor with its open/closed status.
    All,
    /// Every vendor with its open days in the date's month.
    Calendar,
}

/// A vendor's open days within one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    /// Display name.
    pub name: String,
    /// Reference page number.
    pub page: u16,
    /// Days of the month on which the vendor is open.
    pub open_days: Vec<u8>,
}

/// Builds the calendar rows for the month containing `date`.
#[must_use]
pub fn calendar_rows(roster: &Roster, date: Date) -> Vec<CalendarRow> {
    roster
        .vendors()
        .iter()
        .map(|vendor| CalendarRow {
            name: vendor.name().to_string(),
            page: vendor.page(),
            open_days: vendor.pattern().open_days(date.year(), date.month()),
        })
        .collect()
}

/// Writes the requested report for `date`.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn render<W: Write>(
    out: &mut W,
    roster: &Roster,
    date: Date,
    view: View,
    format: OutputFormat,
) -> io::Result<()> {
    match (view, format) {
        (View::Open, OutputFormat::Text) => {
            writeln!(out, "Shop wagons available today:")?;
            for vendor in roster.list_open(date) {
                writeln!(out, "{vendor}")?;
            }
        }
        (View::Open, OutputFormat::Json) => {
            let open: Vec<OpenVendor> = roster.list_open(date);
            write_json(out, &open)?;
        }
        (View::All, OutputFormat::Text) => {
            writeln!(out, "Shop wagons on {date}:")?;
            for row in roster.availability(date) {
                let status: &str = if row.open { "open" } else { "closed" };
                writeln!(out, "{} (Page {}): {status}", row.name, row.page)?;
            }
        }
        (View::All, OutputFormat::Json) => {
            let report: Vec<VendorAvailability> = roster.availability(date);
            write_json(out, &report)?;
        }
        (View::Calendar, OutputFormat::Text) => {
            writeln!(out, "Open days in {} {}:", date.month(), date.year())?;
            for row in calendar_rows(roster, date) {
                let days: String = if row.open_days.is_empty() {
                    String::from("none")
                } else {
                    row.open_days
                        .iter()
                        .map(u8::to_string)
                        .collect::<Vec<String>>()
                        .join(", ")
                };
                writeln!(out, "{} (Page {}): {days}", row.name, row.page)?;
            }
        }
        (View::Calendar, OutputFormat::Json) => {
            write_json(out, &calendar_rows(roster, date))?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
