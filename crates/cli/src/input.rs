// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Probe date input.
//!
//! Dates are entered as `DD-MM-YYYY`. Interactive input re-prompts until a
//! valid date is read; malformed text never reaches the roster.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::debug;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none]-[month padding:none]-[year]");

/// Prompt shown before reading a date interactively.
pub const PROMPT: &str = "Enter the current date (DD-MM-YYYY): ";

/// Date text that is not a valid `DD-MM-YYYY` calendar date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date format '{input}'. Please enter the date in DD-MM-YYYY format.")]
pub struct InputFormatError {
    /// The rejected text.
    input: String,
}

/// Parses a `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns an error if the text is not a valid calendar date in that format.
pub fn parse_date(text: &str) -> Result<Date, InputFormatError> {
    let trimmed: &str = text.trim();
    Date::parse(trimmed, DATE_FORMAT).map_err(|_| InputFormatError {
        input: trimmed.to_string(),
    })
}

/// Prompts until a valid date is entered.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if input ends before a
/// valid date is read.
pub fn prompt_date<R, W>(input: &mut R, output: &mut W) -> io::Result<Date>
where
    R: BufRead,
    W: Write,
{
    let mut line: String = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a date was entered",
            ));
        }

        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(err) => {
                debug!(input = line.trim(), "Rejected date input");
                writeln!(output, "{err}")?;
            }
        }
    }
}
