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

//! Catalog items.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vending_demo_rs::Item;
//!
//! let water = Item::new("Water", dec!(1.00));
//! assert_eq!(water.to_string(), "Water $1.00");
//! assert_eq!(water.stock, Item::DEFAULT_STOCK);
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A purchasable catalog entry.
///
/// Construction performs no validation; a negative price is accepted
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Item {
    pub const DEFAULT_STOCK: u32 = 10;

    /// Creates an item with the default stock level.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self::with_stock(name, price, Self::DEFAULT_STOCK)
    }

    pub fn with_stock(name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Item {
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock >= 1
    }
}

impl fmt::Display for Item {
    /// Renders `"{name} ${price}"` with exactly two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}", self.name, self.price)
    }
}
