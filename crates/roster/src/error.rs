// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use merchant_ring_pattern::PatternError;
use thiserror::Error;

/// Errors raised while building a roster.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A vendor's availability phrase could not be turned into a pattern.
    #[error("Vendor '{vendor}' has an invalid availability pattern: {source}")]
    Pattern {
        /// The vendor whose entry is invalid.
        vendor: String,
        /// The underlying pattern error.
        source: PatternError,
    },
}
