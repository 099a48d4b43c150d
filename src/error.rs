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

//! Error types for the purchase core and the interactive session.

use thiserror::Error;

/// Failures of the pure purchase core.
///
/// Every variant is recovered locally by the session through a looped
/// re-prompt; none of them terminates a run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// Code does not map to a catalog entry
    #[error("no item with that code")]
    NoSuchItem,

    /// Selected item has no remaining stock
    #[error("selected item is out of stock")]
    OutOfStock,

    /// Settlement attempted with no item selected
    #[error("no item selected")]
    NoSelection,

    /// Cash tendered does not cover the selected item's price
    #[error("cash tendered does not cover the price")]
    InsufficientCash,
}

/// Failures that terminate an interactive session.
#[derive(Error, Debug)]
pub enum VendError {
    /// Standard input reached end-of-file before the customer chose to end
    /// the session. Interactive retry loops would otherwise spin forever on
    /// an exhausted stream, so this is terminal.
    #[error("input closed before the session ended")]
    InputClosed,

    /// Reading or writing a console stream failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A purchase operation failed in a state where the session cannot
    /// recover it by re-prompting
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}
