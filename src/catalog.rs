// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The fixed, ordered item catalog.
//!
//! Codes are assigned by enumeration order over the concatenated category
//! lists (beverages, candy, chips, gum) and stay stable for the life of a
//! session. Categories exist for display grouping only.

use crate::item::Item;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Display grouping for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Beverages,
    Candy,
    Chips,
    Gum,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Beverages => "Beverages",
            Category::Candy => "Candy",
            Category::Chips => "Chips",
            Category::Gum => "Gum",
        };
        write!(f, "{name}")
    }
}

/// One catalog position. The slot's index in the catalog is its item code.
#[derive(Debug, Clone)]
pub struct Slot {
    pub category: Category,
    pub item: Item,
}

/// Ordered mapping from integer item code to [`Item`].
///
/// # Invariants
///
/// - Every code in `[0, len)` maps to exactly one item; no gaps.
/// - Slots of the same category are contiguous, so a category boundary is
///   wherever a slot's category differs from its predecessor's.
#[derive(Debug, Clone)]
pub struct Catalog {
    slots: Vec<Slot>,
}

impl Catalog {
    pub fn new(slots: Vec<Slot>) -> Self {
        Catalog { slots }
    }

    /// The stock catalog every session starts from.
    pub fn standard() -> Self {
        let groups: [(Category, &[(&str, Decimal)]); 4] = [
            (
                Category::Beverages,
                &[
                    ("Water", dec!(1.00)),
                    ("Iced Coffee", dec!(1.50)),
                    ("Iced Tea", dec!(1.50)),
                    ("Root Beer", dec!(1.75)),
                ],
            ),
            (
                Category::Candy,
                &[
                    ("Snickers", dec!(1.50)),
                    ("M&M's", dec!(1.50)),
                    ("Sour Patch Kids", dec!(2.00)),
                    ("Haribo Gummy Bears", dec!(2.25)),
                ],
            ),
            (
                Category::Chips,
                &[
                    ("Lay's Potato Chips", dec!(1.50)),
                    ("Doritos", dec!(1.50)),
                    ("Pretzels", dec!(1.25)),
                    ("Sun Chips", dec!(1.25)),
                ],
            ),
            (
                Category::Gum,
                &[
                    ("Trident", dec!(1.25)),
                    ("Hubba Bubba", dec!(1.00)),
                    ("Orbit", dec!(1.25)),
                    ("Big Red", dec!(0.75)),
                ],
            ),
        ];

        let slots = groups
            .into_iter()
            .flat_map(|(category, entries)| {
                entries.iter().map(move |(name, price)| Slot {
                    category,
                    item: Item::new(*name, *price),
                })
            })
            .collect();

        Catalog { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks up the item for a code. `None` for codes outside `[0, len)`.
    pub fn get(&self, code: usize) -> Option<&Item> {
        self.slots.get(code).map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, code: usize) -> Option<&mut Item> {
        self.slots.get_mut(code).map(|slot| &mut slot.item)
    }

    /// Iterates slots in code order, yielding `(code, slot)` pairs.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }
}
