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

//! End-of-session sales summary.

use crate::catalog::Catalog;
use crate::machine::VendingMachine;
use rust_decimal::Decimal;
use serde::Serialize;

const MONEY_PRECISION: u32 = 2;

/// Snapshot of a machine after a session.
///
/// Units sold are derived by diffing remaining stock against the catalog the
/// session started from.
#[derive(Debug, Serialize)]
pub struct SalesReport {
    pub revenue: Decimal,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub code: usize,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    pub sold: u32,
}

impl SalesReport {
    pub fn new(machine: &VendingMachine, initial: &Catalog) -> Self {
        let items = machine
            .catalog()
            .slots()
            .map(|(code, slot)| {
                let started_with = initial
                    .get(code)
                    .map(|item| item.stock)
                    .unwrap_or(slot.item.stock);
                ItemReport {
                    code,
                    name: slot.item.name.clone(),
                    price: slot.item.price.round_dp(MONEY_PRECISION),
                    stock: slot.item.stock,
                    sold: started_with.saturating_sub(slot.item.stock),
                }
            })
            .collect();

        SalesReport {
            revenue: machine.balance().round_dp(MONEY_PRECISION),
            items,
        }
    }
}
