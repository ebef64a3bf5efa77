// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while turning pattern text into an availability pattern.
///
/// All of these indicate bad roster data and are reported at construction,
/// never while answering a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The text matches none of the known availability phrases.
    #[error("Unrecognized availability pattern: '{0}'")]
    Unrecognized(String),

    /// A `<N> weeks every <M> months` pattern with a period of zero months.
    #[error("Availability pattern '{0}' has a period of zero months")]
    ZeroMonthPeriod(String),

    /// A week or month count that does not fit the supported range.
    #[error("Availability pattern '{0}' has a count outside 0-255")]
    InvalidCount(String),
}
