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

//! Purchase core public API integration tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vending_demo_rs::{Catalog, Category, Item, PurchaseError, Slot, VendingMachine};

fn single_item_catalog(name: &str, price: Decimal, stock: u32) -> Catalog {
    Catalog::new(vec![Slot {
        category: Category::Beverages,
        item: Item::with_stock(name, price, stock),
    }])
}

#[test]
fn standard_catalog_code_zero_is_water() {
    let machine = VendingMachine::new(Catalog::standard());
    let water = machine.catalog().get(0).unwrap();
    assert_eq!(water.name, "Water");
    assert_eq!(water.price, dec!(1.00));
}

#[test]
fn standard_catalog_codes_are_gapless() {
    let machine = VendingMachine::new(Catalog::standard());
    let n = machine.catalog().len();
    assert_eq!(n, 16);
    for code in 0..n {
        assert!(machine.catalog().get(code).is_some());
    }
    assert!(machine.catalog().get(n).is_none());
}

#[test]
fn completed_purchase_decrements_stock_by_one() {
    let mut machine = VendingMachine::new(Catalog::standard());
    let before = machine.catalog().get(5).unwrap().stock;

    machine.select(5).unwrap();
    machine.settle_credit().unwrap();

    assert_eq!(machine.catalog().get(5).unwrap().stock, before - 1);
}

#[test]
fn stock_never_goes_below_zero() {
    let mut machine = VendingMachine::new(single_item_catalog("Water", dec!(1.00), 1));

    machine.select(0).unwrap();
    machine.settle_credit().unwrap();
    assert_eq!(machine.catalog().get(0).unwrap().stock, 0);

    // The emptied item can no longer be selected.
    assert_eq!(machine.select(0), Err(PurchaseError::OutOfStock));
}

#[test]
fn balance_sums_prices_across_purchases() {
    let mut machine = VendingMachine::new(Catalog::standard());
    let prices = [0usize, 7, 10]
        .map(|code| machine.catalog().get(code).unwrap().price);

    for code in [0usize, 7, 10] {
        machine.select(code).unwrap();
        machine.reset_cash();
        machine.insert_cash(dec!(100.00)); // heavily overpaid
        machine.settle_cash().unwrap();
    }

    let expected: Decimal = prices.iter().sum();
    assert_eq!(machine.balance(), expected);
}

#[test]
fn change_is_tendered_minus_price() {
    let mut machine = VendingMachine::new(single_item_catalog("Test Item", dec!(5.00), 10));
    machine.select(0).unwrap();
    machine.insert_cash(dec!(12.00));

    let change = machine.settle_cash().unwrap();
    assert_eq!(change, dec!(7.00));
}

#[test]
fn underpayment_accumulates_until_covered() {
    let mut machine = VendingMachine::new(single_item_catalog("Test Item", dec!(5.00), 10));
    machine.select(0).unwrap();
    machine.reset_cash();

    machine.insert_cash(dec!(2.00));
    assert_eq!(machine.amount_due(), Some(dec!(3.00)));
    assert_eq!(machine.settle_cash(), Err(PurchaseError::InsufficientCash));

    machine.insert_cash(dec!(3.00));
    assert_eq!(machine.amount_due(), None);
    assert_eq!(machine.settle_cash().unwrap(), dec!(0.00));
}

#[test]
fn reset_cash_starts_a_fresh_attempt() {
    let mut machine = VendingMachine::new(single_item_catalog("Test Item", dec!(5.00), 10));
    machine.select(0).unwrap();

    machine.insert_cash(dec!(4.00));
    machine.reset_cash();
    assert_eq!(machine.transaction_amount(), Decimal::ZERO);
    assert_eq!(machine.amount_due(), Some(dec!(5.00)));
}

#[test]
fn credit_charges_price_regardless_of_cash_state() {
    let mut machine = VendingMachine::new(single_item_catalog("Test Item", dec!(5.00), 10));
    machine.select(0).unwrap();
    machine.insert_cash(dec!(1.00)); // stale cash from an abandoned attempt

    let charged = machine.settle_credit().unwrap();
    assert_eq!(charged, dec!(5.00));
    assert_eq!(machine.balance(), dec!(5.00));
}

#[test]
fn selection_survives_settlement_until_cleared() {
    let mut machine = VendingMachine::new(Catalog::standard());
    machine.select(2).unwrap();
    machine.settle_credit().unwrap();

    // Still selected after the sale; only a catalog re-render clears it.
    assert_eq!(machine.selected_item().unwrap().name, "Iced Tea");
    machine.clear_selection();
    assert!(machine.selected_item().is_none());
}
