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

mod catalog;
mod error;
mod roster;
mod vendor;

#[cfg(test)]
mod tests;

pub use catalog::{RosterEntry, WAGONS};
pub use error::RosterError;
pub use roster::{OpenVendor, Roster, VendorAvailability};
pub use vendor::Vendor;
