// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    ANCHOR, create_always_vendor, create_builtin_roster, create_season_vendor, create_test_rng,
};
use crate::{OpenVendor, Roster, RosterEntry, RosterError, Vendor, VendorAvailability};
use merchant_ring_pattern::{AvailabilityPattern, PatternError};
use time::macros::date;

#[test]
fn test_always_vendor_is_listed() {
    let roster: Roster = Roster::new(vec![create_always_vendor("Chunky's Pet Pals", 10)]);
    let open: Vec<OpenVendor> = roster.list_open(date!(2031 - 03 - 09));
    assert_eq!(
        open,
        vec![OpenVendor {
            name: String::from("Chunky's Pet Pals"),
            page: 10,
        }]
    );
}

#[test]
fn test_season_vendor_leave_month_scenario() {
    let roster: Roster = Roster::new(vec![create_season_vendor("Violet's Athaneum", 42)]);
    assert!(roster.list_open(date!(2026 - 07 - 15)).is_empty());
    assert_eq!(roster.list_open(date!(2026 - 06 - 15)).len(), 1);
}

#[test]
fn test_list_open_preserves_order_and_duplicates() {
    let roster: Roster = Roster::new(vec![
        create_always_vendor("Zed's", 9),
        create_season_vendor("Violet's Athaneum", 42),
        create_always_vendor("Alpha", 1),
        create_always_vendor("Alpha", 1),
    ]);

    let names: Vec<String> = roster
        .list_open(date!(2026 - 06 - 15))
        .into_iter()
        .map(|vendor| vendor.name)
        .collect();
    assert_eq!(names, vec!["Zed's", "Violet's Athaneum", "Alpha", "Alpha"]);

    let names: Vec<String> = roster
        .list_open(date!(2026 - 07 - 15))
        .into_iter()
        .map(|vendor| vendor.name)
        .collect();
    assert_eq!(names, vec!["Zed's", "Alpha", "Alpha"]);
}

#[test]
fn test_list_open_is_repeatable() {
    let roster: Roster = create_builtin_roster();
    let mut probe = date!(2026 - 01 - 01);
    while probe.year() == 2026 {
        assert_eq!(roster.list_open(probe), roster.list_open(probe));
        probe = probe.next_day().unwrap();
    }
}

#[test]
fn test_builtin_roster_always_includes_always_vendors() {
    let roster: Roster = create_builtin_roster();
    let always: Vec<&str> = roster
        .vendors()
        .iter()
        .filter(|vendor| *vendor.pattern() == AvailabilityPattern::Always)
        .map(Vendor::name)
        .collect();
    assert_eq!(always.len(), 4);

    let mut probe = date!(2026 - 01 - 01);
    while probe.year() == 2026 {
        let open: Vec<OpenVendor> = roster.list_open(probe);
        for name in &always {
            assert!(open.iter().any(|vendor| vendor.name == *name), "{name} on {probe}");
        }
        probe = probe.next_day().unwrap();
    }
}

#[test]
fn test_open_vendors_are_a_subsequence_of_the_roster() {
    let roster: Roster = create_builtin_roster();
    let open: Vec<OpenVendor> = roster.list_open(date!(2026 - 10 - 17));
    let mut names = roster.vendors().iter().map(Vendor::name);
    for vendor in &open {
        assert!(names.any(|name| name == vendor.name), "{} out of order", vendor.name);
    }
}

#[test]
fn test_unrecognized_entry_fails_at_construction() {
    let entries: [RosterEntry<'_>; 2] = [
        RosterEntry::new("Chunky's Pet Pals", "always", 45),
        RosterEntry::new("Typo Wagon", "leaves 1 weekend a mnoth", 99),
    ];
    let result: Result<Roster, RosterError> =
        Roster::from_entries(&entries, ANCHOR, &mut create_test_rng());
    assert_eq!(
        result,
        Err(RosterError::Pattern {
            vendor: String::from("Typo Wagon"),
            source: PatternError::Unrecognized(String::from("leaves 1 weekend a mnoth")),
        })
    );
}

#[test]
fn test_roster_error_display() {
    let err: RosterError = RosterError::Pattern {
        vendor: String::from("Typo Wagon"),
        source: PatternError::Unrecognized(String::from("sometimes")),
    };
    assert_eq!(
        format!("{err}"),
        "Vendor 'Typo Wagon' has an invalid availability pattern: Unrecognized availability pattern: 'sometimes'"
    );
}

#[test]
fn test_same_seed_builds_same_roster() {
    let first: Roster = Roster::builtin(ANCHOR, &mut create_test_rng()).unwrap();
    let second: Roster = Roster::builtin(ANCHOR, &mut create_test_rng()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_find_vendor_by_name() {
    let roster: Roster = create_builtin_roster();
    let vendor: &Vendor = roster.find("Bluebird Wagon").unwrap();
    assert_eq!(vendor.page(), 51);
    assert!(vendor.pattern().closed_weekday().is_some());
    assert!(roster.find("bluebird wagon").is_none());
}

#[test]
fn test_availability_reports_every_vendor() {
    let roster: Roster = Roster::new(vec![
        create_always_vendor("Chunky's Pet Pals", 45),
        create_season_vendor("Violet's Athaneum", 42),
    ]);
    let report: Vec<VendorAvailability> = roster.availability(date!(2026 - 07 - 15));
    assert_eq!(
        report,
        vec![
            VendorAvailability {
                name: String::from("Chunky's Pet Pals"),
                page: 45,
                pattern: String::from("always"),
                open: true,
            },
            VendorAvailability {
                name: String::from("Violet's Athaneum"),
                page: 42,
                pattern: String::from("leaves for 1 month each season"),
                open: false,
            },
        ]
    );
}

#[test]
fn test_open_vendor_display_and_json() {
    let vendor: OpenVendor = OpenVendor {
        name: String::from("Delver Delicacies"),
        page: 57,
    };
    assert_eq!(vendor.to_string(), "Delver Delicacies (Page 57)");
    assert_eq!(
        serde_json::to_string(&vendor).unwrap(),
        r#"{"name":"Delver Delicacies","page":57}"#
    );
}

#[test]
fn test_empty_roster() {
    let roster: Roster = Roster::default();
    assert!(roster.is_empty());
    assert!(roster.list_open(date!(2026 - 10 - 17)).is_empty());

    let roster: Roster = vec![create_always_vendor("Solo", 1)].into_iter().collect();
    assert_eq!(roster.len(), 1);
}
