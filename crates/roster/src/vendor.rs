// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RosterError;
use merchant_ring_pattern::AvailabilityPattern;
use rand::Rng;
use time::Date;

/// A shop wagon with its availability rule and reference page.
///
/// The pattern's derived state is drawn once, when the vendor is built,
/// and the vendor is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    /// Display name.
    name: String,
    /// Availability rule with its derived state.
    pattern: AvailabilityPattern,
    /// Reference page number.
    page: u16,
}

impl Vendor {
    /// Creates a new `Vendor` from an already derived pattern.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: AvailabilityPattern, page: u16) -> Self {
        Self {
            name: name.into(),
            pattern,
            page,
        }
    }

    /// Creates a new `Vendor` by parsing and deriving its availability phrase.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the vendor
    /// * `pattern` - Availability phrase
    /// * `page` - Reference page number
    /// * `anchor` - Date whose month anchors the random selections
    /// * `rng` - Random source for the derived state
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is not recognized.
    pub fn from_spec<R>(
        name: &str,
        pattern: &str,
        page: u16,
        anchor: Date,
        rng: &mut R,
    ) -> Result<Self, RosterError>
    where
        R: Rng + ?Sized,
    {
        let pattern: AvailabilityPattern = AvailabilityPattern::construct(pattern, anchor, rng)
            .map_err(|source| RosterError::Pattern {
                vendor: name.to_string(),
                source,
            })?;
        Ok(Self::new(name, pattern, page))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the availability pattern.
    #[must_use]
    pub const fn pattern(&self) -> &AvailabilityPattern {
        &self.pattern
    }

    /// Returns the reference page number.
    #[must_use]
    pub const fn page(&self) -> u16 {
        self.page
    }

    /// Returns whether the vendor is open on the probe date.
    #[must_use]
    pub fn is_open(&self, date: Date) -> bool {
        self.pattern.is_open(date)
    }
}
