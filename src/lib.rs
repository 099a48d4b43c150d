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

//! # Vending Demo
//!
//! This library provides a turn-based command-line vending-machine simulator:
//! a fixed catalog of items, interactive selection and payment, and per-item
//! stock and revenue tracking.
//!
//! ## Core Components
//!
//! - [`VendingMachine`]: pure purchase core (no I/O) owning inventory and revenue
//! - [`Session`]: interactive finite-state machine over generic console streams
//! - [`Catalog`] / [`Item`]: the ordered code → item mapping and its entries
//! - [`SalesReport`]: serializable end-of-session summary
//! - [`VendError`] / [`PurchaseError`]: session and purchase failure types
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use rust_decimal_macros::dec;
//! use vending_demo_rs::{Catalog, Session, SessionOptions, VendingMachine};
//!
//! // Buy a $1.00 Water with exact cash, then end the session.
//! let input = Cursor::new("0\ncash\n1.00\nno\n");
//! let mut output = Vec::new();
//!
//! let machine = VendingMachine::new(Catalog::standard());
//! let mut session = Session::new(machine, input, &mut output, SessionOptions::fast());
//! session.run().unwrap();
//!
//! let machine = session.into_machine();
//! assert_eq!(machine.balance(), dec!(1.00));
//! assert!(!machine.is_active());
//! ```
//!
//! ## Concurrency
//!
//! None. A session is fully single-threaded and synchronous; every suspension
//! is a blocking line read from the input stream.

pub mod banner;
pub mod catalog;
pub mod error;
mod item;
mod machine;
mod report;
mod session;

pub use catalog::{Catalog, Category, Slot};
pub use error::{PurchaseError, VendError};
pub use item::Item;
pub use machine::VendingMachine;
pub use report::{ItemReport, SalesReport};
pub use session::{Session, SessionOptions};
