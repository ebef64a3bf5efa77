// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability patterns with their derived state.
//!
//! An `AvailabilityPattern` is a `PatternSpec` plus whatever random state the
//! phrase needs (a closed weekday, leave months, weekends or a week). The
//! state is drawn exactly once, in `derive`, and evaluation never draws again.
//!
//! ## Anchor period
//!
//! Weekend and week selections are taken from the anchor month supplied at
//! derivation (normally the month the roster was built in). Evaluation only
//! compares the probe date's day-of-month against those ranges, so a probe in
//! another month reuses the anchor month's day numbers.
//!
//! ## Deterministic patterns
//!
//! `always`, `Every other week` and `<N> weeks every <M> months` carry no
//! random state. The weekly recurrence seeds its own generator from the block
//! that contains the probe date, so every call for the same block agrees.

use crate::calendar::{self, DayRange, MonthBlock, Season, WeekSpan};
use crate::error::PatternError;
use crate::spec::PatternSpec;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Date, Month, OffsetDateTime, Weekday};
use tracing::debug;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// A vendor's recurring availability rule together with its derived state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityPattern {
    /// Open every day.
    Always,
    /// Closed on one weekday, open the other six.
    SixDaysAWeek {
        /// The recurring closed day.
        closed_day: Weekday,
    },
    /// Open for `weeks` Monday-start weeks in each block of `months` months.
    WeeksEveryNMonths {
        /// Number of open weeks per block.
        weeks: u8,
        /// Length of a block in months (never zero).
        months: u8,
    },
    /// Closed for one month in each season.
    LeavesOneMonthPerSeason {
        /// The leave month of each season, in `Season::ALL` order.
        leave_months: [Month; 4],
    },
    /// Open only on two weekends.
    TwoWeekendsAMonth {
        /// The open weekends, as day-of-month ranges of the anchor month.
        weekends: Vec<DayRange>,
    },
    /// Closed on one weekend, open otherwise.
    LeavesOneWeekendAMonth {
        /// The closed weekend; `None` means the wagon never closes.
        weekend: Option<DayRange>,
    },
    /// Open one week a month, closed all winter.
    OneWeekAMonthExceptWinter {
        /// The open week; `None` means open whenever it is not winter.
        week: Option<DayRange>,
    },
    /// Closed one week a month, open otherwise.
    LeavesOneWeekEveryMonth {
        /// The closed week; `None` means the wagon never closes.
        week: Option<DayRange>,
    },
    /// Open on even-numbered weeks counted from January 1.
    EveryOtherWeek,
}

impl AvailabilityPattern {
    /// Parses pattern text and derives its random state.
    ///
    /// # Arguments
    ///
    /// * `text` - The availability phrase
    /// * `anchor` - The date whose month anchors weekend and week selection
    /// * `rng` - The random source for the derived state
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a recognized availability phrase.
    pub fn construct<R>(text: &str, anchor: Date, rng: &mut R) -> Result<Self, PatternError>
    where
        R: Rng + ?Sized,
    {
        let spec: PatternSpec = text.parse()?;
        Ok(Self::derive(spec, anchor, rng))
    }

    /// Parses pattern text, anchored on today's date and the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a recognized availability phrase.
    pub fn construct_now(text: &str) -> Result<Self, PatternError> {
        let today: Date = OffsetDateTime::now_utc().date();
        Self::construct(text, today, &mut rand::rng())
    }

    /// Draws the derived state for a parsed spec.
    #[must_use]
    pub fn derive<R>(spec: PatternSpec, anchor: Date, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let year: i32 = anchor.year();
        let month: Month = anchor.month();

        let pattern: Self = match spec {
            PatternSpec::Always => Self::Always,
            PatternSpec::SixDaysAWeek => Self::SixDaysAWeek {
                closed_day: calendar::choose(rng, WEEKDAYS.to_vec(), 1)
                    .first()
                    .copied()
                    .unwrap_or(Weekday::Sunday),
            },
            PatternSpec::WeeksEveryNMonths { weeks, months } => {
                Self::WeeksEveryNMonths { weeks, months }
            }
            PatternSpec::LeavesOneMonthPerSeason => Self::LeavesOneMonthPerSeason {
                leave_months: Season::ALL.map(|season| {
                    let months: [Month; 3] = season.months();
                    calendar::choose(&mut *rng, months.to_vec(), 1)
                        .first()
                        .copied()
                        .unwrap_or(months[0])
                }),
            },
            PatternSpec::TwoWeekendsAMonth => Self::TwoWeekendsAMonth {
                weekends: calendar::choose(rng, calendar::weekends_in_month(year, month), 2),
            },
            PatternSpec::LeavesOneWeekendAMonth => Self::LeavesOneWeekendAMonth {
                weekend: calendar::choose(rng, calendar::weekends_in_month(year, month), 1)
                    .first()
                    .copied(),
            },
            PatternSpec::OneWeekAMonthExceptWinter => Self::OneWeekAMonthExceptWinter {
                week: calendar::choose(rng, calendar::weeks_in_month(year, month), 1)
                    .first()
                    .copied(),
            },
            PatternSpec::LeavesOneWeekEveryMonth => Self::LeavesOneWeekEveryMonth {
                week: calendar::choose(rng, calendar::weeks_in_month(year, month), 1)
                    .first()
                    .copied(),
            },
            PatternSpec::EveryOtherWeek => Self::EveryOtherWeek,
        };

        debug!(spec = %spec, anchor = %anchor, state = ?pattern, "Derived availability pattern");
        pattern
    }

    /// Returns the phrase this pattern was derived from.
    #[must_use]
    pub const fn spec(&self) -> PatternSpec {
        match self {
            Self::Always => PatternSpec::Always,
            Self::SixDaysAWeek { .. } => PatternSpec::SixDaysAWeek,
            Self::WeeksEveryNMonths { weeks, months } => PatternSpec::WeeksEveryNMonths {
                weeks: *weeks,
                months: *months,
            },
            Self::LeavesOneMonthPerSeason { .. } => PatternSpec::LeavesOneMonthPerSeason,
            Self::TwoWeekendsAMonth { .. } => PatternSpec::TwoWeekendsAMonth,
            Self::LeavesOneWeekendAMonth { .. } => PatternSpec::LeavesOneWeekendAMonth,
            Self::OneWeekAMonthExceptWinter { .. } => PatternSpec::OneWeekAMonthExceptWinter,
            Self::LeavesOneWeekEveryMonth { .. } => PatternSpec::LeavesOneWeekEveryMonth,
            Self::EveryOtherWeek => PatternSpec::EveryOtherWeek,
        }
    }

    /// Returns the recurring closed day, for `Six days a week`.
    #[must_use]
    pub const fn closed_weekday(&self) -> Option<Weekday> {
        match self {
            Self::SixDaysAWeek { closed_day } => Some(*closed_day),
            _ => None,
        }
    }

    /// Returns the leave month of each season, for `leaves for 1 month each season`.
    #[must_use]
    pub const fn leave_months(&self) -> Option<[Month; 4]> {
        match self {
            Self::LeavesOneMonthPerSeason { leave_months } => Some(*leave_months),
            _ => None,
        }
    }

    /// Returns the selected weekends of the weekend-based patterns.
    #[must_use]
    pub fn weekends(&self) -> &[DayRange] {
        match self {
            Self::TwoWeekendsAMonth { weekends } => weekends,
            Self::LeavesOneWeekendAMonth { weekend } => weekend.as_slice(),
            _ => &[],
        }
    }

    /// Returns the selected week of the week-based monthly patterns.
    #[must_use]
    pub const fn week(&self) -> Option<DayRange> {
        match self {
            Self::OneWeekAMonthExceptWinter { week } | Self::LeavesOneWeekEveryMonth { week } => {
                *week
            }
            _ => None,
        }
    }

    /// Returns whether the pattern is open on the probe date.
    #[must_use]
    pub fn is_open(&self, date: Date) -> bool {
        let day: u8 = date.day();

        match self {
            Self::Always => true,
            Self::SixDaysAWeek { closed_day } => date.weekday() != *closed_day,
            Self::WeeksEveryNMonths { weeks, months } => {
                open_weeks_in_block(date, *weeks, *months)
                    .iter()
                    .any(|week| week.contains(date))
            }
            Self::LeavesOneMonthPerSeason { leave_months } => {
                !leave_months.contains(&date.month())
            }
            Self::TwoWeekendsAMonth { weekends } => {
                calendar::is_weekend(date) && weekends.iter().any(|weekend| weekend.contains(day))
            }
            Self::LeavesOneWeekendAMonth { weekend } => weekend
                .is_none_or(|weekend| !(calendar::is_weekend(date) && weekend.contains(day))),
            Self::OneWeekAMonthExceptWinter { week } => {
                Season::of(date.month()) != Season::Winter
                    && week.is_none_or(|week| week.contains(day))
            }
            Self::LeavesOneWeekEveryMonth { week } => week.is_none_or(|week| !week.contains(day)),
            Self::EveryOtherWeek => ((date.ordinal() - 1) / 7) % 2 == 0,
        }
    }

    /// Lists the days of a month on which the pattern is open.
    #[must_use]
    pub fn open_days(&self, year: i32, month: Month) -> Vec<u8> {
        calendar::days_of_month(year, month)
            .filter(|day| self.is_open(*day))
            .map(Date::day)
            .collect()
    }
}

/// Selects the open weeks of the block containing `date`.
///
/// The choice is seeded from the block identity and the recurrence, so it is
/// a pure function of the probe date.
#[must_use]
pub fn open_weeks_in_block(date: Date, weeks: u8, months: u8) -> Vec<WeekSpan> {
    let Some(block) = MonthBlock::containing(date, months) else {
        return Vec::new();
    };
    let first_month: u64 = block.first_month().map_or(0, |month| u64::from(u8::from(month)));
    let seed: u64 = (u64::from(block.year().unsigned_abs()) << 32)
        | (first_month << 16)
        | (u64::from(weeks) << 8)
        | u64::from(months);

    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    calendar::choose(&mut rng, block.weeks(), usize::from(weeks))
}
