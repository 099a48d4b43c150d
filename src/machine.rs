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

//! The purchase core.
//!
//! [`VendingMachine`] owns the inventory, the revenue balance, and the state
//! of the purchase in progress. It performs no I/O; the interactive session
//! drives it and renders its results.
//!
//! A purchase moves through:
//!
//!   select ──cash──► insert_cash (repeat) ──► settle_cash
//!          └─credit───────────────────────► settle_credit
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vending_demo_rs::{Catalog, VendingMachine};
//!
//! let mut machine = VendingMachine::new(Catalog::standard());
//! machine.select(0).unwrap(); // Water $1.00
//! machine.insert_cash(dec!(2.00));
//! let change = machine.settle_cash().unwrap();
//! assert_eq!(change, dec!(1.00));
//! assert_eq!(machine.balance(), dec!(1.00));
//! ```

use crate::catalog::Catalog;
use crate::error::PurchaseError;
use crate::item::Item;
use rust_decimal::Decimal;

/// A single-session vending machine.
///
/// # Invariants
///
/// - `balance` is monotonically non-decreasing; it accumulates item prices,
///   never cash tendered.
/// - `selection` is `Some` only while one purchase flow is in progress and
///   is cleared whenever the catalog is re-rendered.
/// - `transaction_amount` is only meaningful during a cash settlement and is
///   reset to zero before each new cash attempt.
#[derive(Debug)]
pub struct VendingMachine {
    catalog: Catalog,
    transaction_amount: Decimal,
    balance: Decimal,
    active: bool,
    selection: Option<usize>,
}

impl VendingMachine {
    pub fn new(catalog: Catalog) -> Self {
        VendingMachine {
            catalog,
            transaction_amount: Decimal::ZERO,
            balance: Decimal::ZERO,
            active: true,
            selection: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Accumulated revenue across the session.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Cash tendered so far in the current settlement attempt.
    pub fn transaction_amount(&self) -> Decimal {
        self.transaction_amount
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ends the session; no further purchases are accepted.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// The item currently chosen for purchase, if any.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selection.and_then(|code| self.catalog.get(code))
    }

    /// Cancels any in-flight purchase. Called whenever the catalog is
    /// re-rendered.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Marks the item at `code` as the purchase in progress.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoSuchItem`] - code outside the catalog.
    /// - [`PurchaseError::OutOfStock`] - item has no remaining stock; the
    ///   selection is left unchanged.
    pub fn select(&mut self, code: usize) -> Result<&Item, PurchaseError> {
        match self.catalog.get(code) {
            None => Err(PurchaseError::NoSuchItem),
            Some(item) if !item.in_stock() => Err(PurchaseError::OutOfStock),
            Some(_) => {
                self.selection = Some(code);
                // Lookup cannot fail, the code was just checked.
                self.catalog.get(code).ok_or(PurchaseError::NoSuchItem)
            }
        }
    }

    /// Resets the tendered amount for a fresh cash attempt.
    pub fn reset_cash(&mut self) {
        self.transaction_amount = Decimal::ZERO;
    }

    /// Adds tendered cash to the current settlement attempt.
    pub fn insert_cash(&mut self, amount: Decimal) {
        self.transaction_amount += amount;
    }

    /// Price still owed on the selection, or `None` once the tendered cash
    /// covers it (or when nothing is selected).
    pub fn amount_due(&self) -> Option<Decimal> {
        let item = self.selected_item()?;
        if self.transaction_amount < item.price {
            Some(item.price - self.transaction_amount)
        } else {
            None
        }
    }

    /// Settles the selection against the cash tendered so far, returning the
    /// change owed. Adds the price (not the cash tendered) to the balance and
    /// decrements the item's stock by one.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoSelection`] - no item selected.
    /// - [`PurchaseError::InsufficientCash`] - tendered cash is below the
    ///   price; nothing is recorded.
    pub fn settle_cash(&mut self) -> Result<Decimal, PurchaseError> {
        let code = self.selection.ok_or(PurchaseError::NoSelection)?;
        let price = self
            .catalog
            .get(code)
            .ok_or(PurchaseError::NoSuchItem)?
            .price;
        if self.transaction_amount < price {
            return Err(PurchaseError::InsufficientCash);
        }

        let change = self.transaction_amount - price;
        self.record_sale(code, price)?;
        Ok(change)
    }

    /// Charges the selection's full price to the card, returning the amount
    /// charged. Credit never fails in this machine.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoSelection`] - no item selected.
    pub fn settle_credit(&mut self) -> Result<Decimal, PurchaseError> {
        let code = self.selection.ok_or(PurchaseError::NoSelection)?;
        let price = self
            .catalog
            .get(code)
            .ok_or(PurchaseError::NoSuchItem)?
            .price;
        self.record_sale(code, price)?;
        Ok(price)
    }

    fn record_sale(&mut self, code: usize, price: Decimal) -> Result<(), PurchaseError> {
        let item = self.catalog.get_mut(code).ok_or(PurchaseError::NoSuchItem)?;
        debug_assert!(
            item.in_stock(),
            "Invariant violated: settling an out-of-stock item: {}",
            item.name
        );
        item.stock = item.stock.saturating_sub(1);
        self.balance += price;
        Ok(())
    }
}
