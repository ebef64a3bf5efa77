// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic shared by the availability patterns.
//!
//! This module provides:
//! - Day-of-month ranges for weekends and Monday-start weeks
//! - Season membership for calendar months
//! - Month blocks used by the `<N> weeks every <M> months` recurrence
//! - Uniform selection without replacement from candidate intervals
//!
//! ## Invariants
//!
//! - A weekend candidate is a Saturday whose Sunday falls in the same month
//! - A week candidate is a Monday whose following Sunday falls in the same month
//! - Month blocks never cross a year boundary

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Weekday};

/// An inclusive range of days within a month (e.g., 15..=21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayRange {
    /// First day of the range (inclusive).
    start: u8,
    /// Last day of the range (inclusive).
    end: u8,
}

impl DayRange {
    /// Creates a new `DayRange`.
    ///
    /// The bounds are stored in ascending order regardless of argument order.
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// Returns whether `day` lies within the range, bounds included.
    #[must_use]
    pub const fn contains(&self, day: u8) -> bool {
        self.start <= day && day <= self.end
    }
}

impl std::fmt::Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Meteorological seasons, with December counted as winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// December, January, February.
    Winter,
    /// March, April, May.
    Spring,
    /// June, July, August.
    Summer,
    /// September, October, November.
    Autumn,
}

impl Season {
    /// All seasons in calendar order, starting with winter.
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Autumn];

    /// Returns the three months belonging to this season.
    #[must_use]
    pub const fn months(self) -> [Month; 3] {
        match self {
            Self::Winter => [Month::December, Month::January, Month::February],
            Self::Spring => [Month::March, Month::April, Month::May],
            Self::Summer => [Month::June, Month::July, Month::August],
            Self::Autumn => [Month::September, Month::October, Month::November],
        }
    }

    /// Returns the season a month belongs to.
    #[must_use]
    pub const fn of(month: Month) -> Self {
        match month {
            Month::December | Month::January | Month::February => Self::Winter,
            Month::March | Month::April | Month::May => Self::Spring,
            Month::June | Month::July | Month::August => Self::Summer,
            Month::September | Month::October | Month::November => Self::Autumn,
        }
    }
}

/// Returns whether the date falls on a Saturday or Sunday.
#[must_use]
pub const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Iterates over every day of the given month, in order.
///
/// Yields nothing if the year is outside the supported calendar range.
pub fn days_of_month(year: i32, month: Month) -> impl Iterator<Item = Date> {
    let first: Option<Date> = Date::from_calendar_date(year, month, 1).ok();
    std::iter::successors(first, move |day| {
        day.next_day().filter(|next| next.month() == month)
    })
}

/// Lists every Saturday-Sunday weekend fully contained in the month.
#[must_use]
pub fn weekends_in_month(year: i32, month: Month) -> Vec<DayRange> {
    days_of_month(year, month)
        .filter(|day| day.weekday() == Weekday::Saturday)
        .filter_map(|saturday| {
            let sunday: Date = saturday.next_day()?;
            (sunday.month() == month).then_some(DayRange::new(saturday.day(), sunday.day()))
        })
        .collect()
}

/// Lists every Monday-start seven day week fully contained in the month.
#[must_use]
pub fn weeks_in_month(year: i32, month: Month) -> Vec<DayRange> {
    days_of_month(year, month)
        .filter(|day| day.weekday() == Weekday::Monday)
        .filter_map(|monday| {
            let sunday: Date = monday.checked_add(Duration::days(6))?;
            (sunday.month() == month).then_some(DayRange::new(monday.day(), sunday.day()))
        })
        .collect()
}

/// Chooses `count` candidates uniformly at random without replacement.
///
/// If there are no more candidates than requested, all of them are returned.
/// The result keeps the candidates in their input order.
pub(crate) fn choose<R, T>(rng: &mut R, candidates: Vec<T>, count: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    if candidates.len() <= count {
        return candidates;
    }

    let mut picked: Vec<usize> = rand::seq::index::sample(rng, candidates.len(), count)
        .into_iter()
        .collect();
    picked.sort_unstable();
    picked
        .into_iter()
        .filter_map(|index| candidates.get(index).copied())
        .collect()
}

/// A Monday-start week with concrete dates (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekSpan {
    /// The Monday that opens the week.
    start: Date,
    /// The Sunday that closes the week.
    end: Date,
}

impl WeekSpan {
    /// Returns the Monday that opens the week.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the Sunday that closes the week.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns whether the date lies within the week, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A run of consecutive months within one year.
///
/// Blocks of size `M` are anchored on months 1, 1+M, 1+2M, ... and the last
/// block of a year is cut short at December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthBlock {
    /// The calendar year of the block.
    year: i32,
    /// Number of the first month (1-12).
    first_month: u8,
    /// Number of the last month (1-12, inclusive).
    last_month: u8,
}

impl MonthBlock {
    /// Returns the block of `months` months that contains `date`.
    ///
    /// Returns `None` when `months` is zero.
    #[must_use]
    pub fn containing(date: Date, months: u8) -> Option<Self> {
        if months == 0 {
            return None;
        }

        let month: u8 = u8::from(date.month());
        let first_month: u8 = 1 + ((month - 1) / months) * months;
        let last_month: u8 = first_month.saturating_add(months - 1).min(12);

        Some(Self {
            year: date.year(),
            first_month,
            last_month,
        })
    }

    /// Returns the calendar year of the block.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the first month of the block.
    #[must_use]
    pub fn first_month(&self) -> Option<Month> {
        Month::try_from(self.first_month).ok()
    }

    /// Returns the last month of the block.
    #[must_use]
    pub fn last_month(&self) -> Option<Month> {
        Month::try_from(self.last_month).ok()
    }

    /// Returns whether the date falls within the block.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        let month: u8 = u8::from(date.month());
        date.year() == self.year && self.first_month <= month && month <= self.last_month
    }

    /// Iterates over every day of the block, in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        let first: Option<Date> = self
            .first_month()
            .and_then(|month| Date::from_calendar_date(self.year, month, 1).ok());
        std::iter::successors(first, move |day| {
            day.next_day().filter(|next| self.contains(*next))
        })
    }

    /// Lists every Monday-start week whose Sunday also falls within the block.
    #[must_use]
    pub fn weeks(&self) -> Vec<WeekSpan> {
        self.days()
            .filter(|day| day.weekday() == Weekday::Monday)
            .filter_map(|monday| {
                let sunday: Date = monday.checked_add(Duration::days(6))?;
                self.contains(sunday).then_some(WeekSpan {
                    start: monday,
                    end: sunday,
                })
            })
            .collect()
    }
}
