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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod pattern;
mod spec;

#[cfg(test)]
mod tests;

pub use calendar::{
    DayRange, MonthBlock, Season, WeekSpan, days_of_month, is_weekend, weekends_in_month,
    weeks_in_month,
};
pub use error::PatternError;
pub use pattern::{AvailabilityPattern, open_weeks_in_block};
pub use spec::{PHRASES, PatternSpec};
