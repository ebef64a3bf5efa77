// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Roster, Vendor};
use merchant_ring_pattern::AvailabilityPattern;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::Date;
use time::Month;
use time::macros::date;

pub const ANCHOR: Date = date!(2026 - 10 - 17);

pub fn create_test_rng() -> StdRng {
    StdRng::seed_from_u64(2026)
}

pub fn create_always_vendor(name: &str, page: u16) -> Vendor {
    Vendor::new(name, AvailabilityPattern::Always, page)
}

pub fn create_season_vendor(name: &str, page: u16) -> Vendor {
    Vendor::new(
        name,
        AvailabilityPattern::LeavesOneMonthPerSeason {
            leave_months: [Month::December, Month::April, Month::July, Month::October],
        },
        page,
    )
}

pub fn create_builtin_roster() -> Roster {
    Roster::builtin(ANCHOR, &mut create_test_rng()).unwrap()
}
