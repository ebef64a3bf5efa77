// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of availability phrases.
//!
//! A roster entry describes when a wagon trades with a short phrase such as
//! `"leaves 1 weekend a month"`. Parsing maps the phrase onto a `PatternSpec`
//! and draws no random state; that happens later, in derivation.
//!
//! ## Vocabulary
//!
//! Literal phrases are matched exactly against `PHRASES`. The only
//! parameterised form is `<N> week(s) every <M> month(s)`.

use crate::error::PatternError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// A parsed availability phrase, before any random state is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternSpec {
    /// `always`
    Always,
    /// `Six days a week`
    SixDaysAWeek,
    /// `<N> week(s) every <M> month(s)`
    WeeksEveryNMonths {
        /// Number of open weeks per block.
        weeks: u8,
        /// Length of a block in months.
        months: u8,
    },
    /// `leaves for 1 month each season`
    LeavesOneMonthPerSeason,
    /// `2 weekends a month`
    TwoWeekendsAMonth,
    /// `leaves 1 weekend a month`
    LeavesOneWeekendAMonth,
    /// `One week a month, except in winter`
    OneWeekAMonthExceptWinter,
    /// `leaves 1 week every month`
    LeavesOneWeekEveryMonth,
    /// `Every other week`
    EveryOtherWeek,
}

/// Literal phrases and the pattern each one names.
pub const PHRASES: &[(&str, PatternSpec)] = &[
    ("always", PatternSpec::Always),
    ("Six days a week", PatternSpec::SixDaysAWeek),
    (
        "leaves for 1 month each season",
        PatternSpec::LeavesOneMonthPerSeason,
    ),
    ("2 weekends a month", PatternSpec::TwoWeekendsAMonth),
    ("leaves 1 weekend a month", PatternSpec::LeavesOneWeekendAMonth),
    (
        "One week a month, except in winter",
        PatternSpec::OneWeekAMonthExceptWinter,
    ),
    ("leaves 1 week every month", PatternSpec::LeavesOneWeekEveryMonth),
    ("Every other week", PatternSpec::EveryOtherWeek),
];

#[allow(clippy::unwrap_used)]
static WEEKS_EVERY_MONTHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) weeks? every (\d+) months?$").unwrap());

impl PatternSpec {
    /// Returns whether this pattern draws random state when derived.
    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        !matches!(
            self,
            Self::Always | Self::WeeksEveryNMonths { .. } | Self::EveryOtherWeek
        )
    }
}

impl FromStr for PatternSpec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((_, spec)) = PHRASES.iter().find(|(phrase, _)| *phrase == s) {
            return Ok(*spec);
        }

        let captures = WEEKS_EVERY_MONTHS
            .captures(s)
            .ok_or_else(|| PatternError::Unrecognized(s.to_string()))?;
        let weeks: u8 = captures[1]
            .parse()
            .map_err(|_| PatternError::InvalidCount(s.to_string()))?;
        let months: u8 = captures[2]
            .parse()
            .map_err(|_| PatternError::InvalidCount(s.to_string()))?;

        if months == 0 {
            return Err(PatternError::ZeroMonthPeriod(s.to_string()));
        }

        Ok(Self::WeeksEveryNMonths { weeks, months })
    }
}

impl std::fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Self::WeeksEveryNMonths { weeks, months } = self {
            let week_word: &str = if *weeks == 1 { "week" } else { "weeks" };
            let month_word: &str = if *months == 1 { "month" } else { "months" };
            return write!(f, "{weeks} {week_word} every {months} {month_word}");
        }

        let phrase: &str = PHRASES
            .iter()
            .find(|(_, spec)| *spec == *self)
            .map_or("", |(phrase, _)| *phrase);
        write!(f, "{phrase}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_literal_phrase_parses() {
        for (phrase, expected) in PHRASES {
            let parsed: PatternSpec = phrase.parse().unwrap();
            assert_eq!(parsed, *expected, "phrase '{phrase}'");
        }
    }

    #[test]
    fn test_weeks_every_months_forms() {
        assert_eq!(
            "1 week every 3 months".parse::<PatternSpec>().unwrap(),
            PatternSpec::WeeksEveryNMonths {
                weeks: 1,
                months: 3
            }
        );
        assert_eq!(
            "2 weeks every 1 month".parse::<PatternSpec>().unwrap(),
            PatternSpec::WeeksEveryNMonths {
                weeks: 2,
                months: 1
            }
        );
        assert_eq!(
            "0 weeks every 12 months".parse::<PatternSpec>().unwrap(),
            PatternSpec::WeeksEveryNMonths {
                weeks: 0,
                months: 12
            }
        );
    }

    #[test]
    fn test_literal_match_is_exact() {
        assert_eq!(
            "Always".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(String::from("Always")))
        );
        assert_eq!(
            "always ".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(String::from("always ")))
        );
        assert_eq!(
            "six days a week".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(String::from("six days a week")))
        );
    }

    #[test]
    fn test_typo_is_unrecognized() {
        assert!(matches!(
            "leaves 1 weekend a mnoth".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(_))
        ));
        assert!(matches!(
            "1 week every three months".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(_))
        ));
        assert!(matches!(
            "1 week every 3 months, mostly".parse::<PatternSpec>(),
            Err(PatternError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_zero_month_period_rejected() {
        assert_eq!(
            "1 week every 0 months".parse::<PatternSpec>(),
            Err(PatternError::ZeroMonthPeriod(String::from(
                "1 week every 0 months"
            )))
        );
    }

    #[test]
    fn test_oversized_count_rejected() {
        assert_eq!(
            "300 weeks every 3 months".parse::<PatternSpec>(),
            Err(PatternError::InvalidCount(String::from(
                "300 weeks every 3 months"
            )))
        );
    }

    #[test]
    fn test_display_uses_canonical_phrase() {
        for (phrase, spec) in PHRASES {
            assert_eq!(spec.to_string(), *phrase);
        }
        let spec: PatternSpec = PatternSpec::WeeksEveryNMonths {
            weeks: 1,
            months: 3,
        };
        assert_eq!(spec.to_string(), "1 week every 3 months");
        let spec: PatternSpec = PatternSpec::WeeksEveryNMonths {
            weeks: 2,
            months: 1,
        };
        assert_eq!(spec.to_string(), "2 weeks every 1 month");
    }

    #[test]
    fn test_randomized_flag() {
        assert!(!PatternSpec::Always.is_randomized());
        assert!(!PatternSpec::EveryOtherWeek.is_randomized());
        assert!(
            !PatternSpec::WeeksEveryNMonths {
                weeks: 1,
                months: 2
            }
            .is_randomized()
        );
        assert!(PatternSpec::SixDaysAWeek.is_randomized());
        assert!(PatternSpec::LeavesOneMonthPerSeason.is_randomized());
        assert!(PatternSpec::TwoWeekendsAMonth.is_randomized());
        assert!(PatternSpec::LeavesOneWeekendAMonth.is_randomized());
        assert!(PatternSpec::OneWeekAMonthExceptWinter.is_randomized());
        assert!(PatternSpec::LeavesOneWeekEveryMonth.is_randomized());
    }
}
