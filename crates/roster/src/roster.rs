// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The vendor roster and availability queries.
//!
//! ## Invariants
//!
//! - Roster order is display order; queries never reorder or deduplicate
//! - Queries are read-only; derived state is fixed when the roster is built

use crate::catalog::{RosterEntry, WAGONS};
use crate::error::RosterError;
use crate::vendor::Vendor;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, info};

/// A vendor that is open on the probed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVendor {
    /// Display name.
    pub name: String,
    /// Reference page number.
    pub page: u16,
}

impl std::fmt::Display for OpenVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Page {})", self.name, self.page)
    }
}

/// Open/closed status of one vendor on the probed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorAvailability {
    /// Display name.
    pub name: String,
    /// Reference page number.
    pub page: u16,
    /// The vendor's availability phrase.
    pub pattern: String,
    /// Whether the vendor is open.
    pub open: bool,
}

/// An ordered, fixed list of vendors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    vendors: Vec<Vendor>,
}

impl Roster {
    /// Creates a roster from vendors, keeping their order.
    #[must_use]
    pub const fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Builds a roster from raw entries.
    ///
    /// # Errors
    ///
    /// Returns an error for the first entry whose phrase is not recognized.
    pub fn from_entries<R>(
        entries: &[RosterEntry<'_>],
        anchor: Date,
        rng: &mut R,
    ) -> Result<Self, RosterError>
    where
        R: Rng + ?Sized,
    {
        let vendors: Vec<Vendor> = entries
            .iter()
            .map(|entry| Vendor::from_spec(entry.name, entry.pattern, entry.page, anchor, &mut *rng))
            .collect::<Result<_, _>>()?;

        info!(vendors = vendors.len(), anchor = %anchor, "Built vendor roster");
        Ok(Self::new(vendors))
    }

    /// Builds the built-in wagon roster.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog phrase is not recognized.
    pub fn builtin<R>(anchor: Date, rng: &mut R) -> Result<Self, RosterError>
    where
        R: Rng + ?Sized,
    {
        Self::from_entries(WAGONS, anchor, rng)
    }

    /// Returns the vendors in roster order.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Returns the number of vendors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Returns whether the roster has no vendors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Looks up a vendor by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|vendor| vendor.name() == name)
    }

    /// Lists the vendors open on the probe date, in roster order.
    #[must_use]
    pub fn list_open(&self, date: Date) -> Vec<OpenVendor> {
        let open: Vec<OpenVendor> = self
            .vendors
            .iter()
            .filter(|vendor| vendor.is_open(date))
            .map(|vendor| OpenVendor {
                name: vendor.name().to_string(),
                page: vendor.page(),
            })
            .collect();

        debug!(date = %date, open = open.len(), total = self.vendors.len(), "Listed open vendors");
        open
    }

    /// Reports every vendor's status on the probe date, in roster order.
    #[must_use]
    pub fn availability(&self, date: Date) -> Vec<VendorAvailability> {
        self.vendors
            .iter()
            .map(|vendor| VendorAvailability {
                name: vendor.name().to_string(),
                page: vendor.page(),
                pattern: vendor.pattern().spec().to_string(),
                open: vendor.is_open(date),
            })
            .collect()
    }
}

impl FromIterator<Vendor> for Roster {
    fn from_iter<I: IntoIterator<Item = Vendor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
