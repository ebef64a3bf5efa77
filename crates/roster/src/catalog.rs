// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The built-in wagon catalog.

/// A raw roster row: vendor name, availability phrase and reference page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// Display name of the wagon.
    pub name: &'a str,
    /// Availability phrase, parsed when the roster is built.
    pub pattern: &'a str,
    /// Reference page number.
    pub page: u16,
}

impl<'a> RosterEntry<'a> {
    /// Creates a new `RosterEntry`.
    #[must_use]
    pub const fn new(name: &'a str, pattern: &'a str, page: u16) -> Self {
        Self {
            name,
            pattern,
            page,
        }
    }
}

/// The Littfeld shop wagons, in display order.
pub const WAGONS: &[RosterEntry<'static>] = &[
    RosterEntry::new("Morris's Miscibles", "1 week every 3 months", 39),
    RosterEntry::new("Gallery of Curios", "1 week every 2 months", 40),
    RosterEntry::new("Violet's Athaneum", "leaves for 1 month each season", 42),
    RosterEntry::new("Game Parlor", "2 weekends a month", 43),
    RosterEntry::new("Alver's Bakery", "leaves 1 weekend a month", 44),
    RosterEntry::new("Chunky's Pet Pals", "always", 45),
    RosterEntry::new("Hugo's Lifesavers", "always", 45),
    RosterEntry::new("Brauniard's Auctions", "2 weeks every 1 month", 46),
    RosterEntry::new(
        "Bard's Magical Secret",
        "One week a month, except in winter",
        46,
    ),
    RosterEntry::new("House of Fineries", "2 weeks every 3 months", 47),
    RosterEntry::new("Lucas and Grier's", "Every other week", 47),
    RosterEntry::new("Mutya's This n That", "leaves 1 week every month", 49),
    RosterEntry::new("Angeline's Forgewagon", "leaves 1 week every month", 50),
    RosterEntry::new("Ayvaire's Nest", "always", 50),
    RosterEntry::new("Bluebird Wagon", "Six days a week", 51),
    RosterEntry::new("Delver Delicacies", "always", 57),
];
