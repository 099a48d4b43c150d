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

//! The interactive purchase session.
//!
//! [`Session`] drives a [`VendingMachine`] through an explicit finite-state
//! machine over line-oriented console I/O:
//!
//! ```text
//! CatalogDisplay ──► SelectItem ──► ChoosePayment ──┬──► SettleCash ──┐
//!       ▲                ▲                          └──► SettleCredit ┤
//!       │ "m"            │ "y"/"yes"                                  │
//!       └────────────────┴───────────────────── Continuation ◄────────┘
//!                                                    │ "n"/"no"
//!                                                    ▼
//!                                                  Ended
//! ```
//!
//! Malformed input is retried with explicit loops inside each step, never by
//! recursion. End-of-input at any prompt terminates the run with
//! [`VendError::InputClosed`].
//!
//! The session is generic over `BufRead`/`Write`, so tests script it with
//! `Cursor` input and a `Vec<u8>` transcript.

use crate::banner;
use crate::error::{PurchaseError, VendError};
use crate::machine::VendingMachine;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Knobs for the cosmetic parts of a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Banner width in columns.
    pub banner_width: usize,
    /// Pause after the swipe prompt during credit settlement.
    pub swipe_pause: Duration,
    /// Pause before each dot of the "Processing...." animation.
    pub processing_pause: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            banner_width: 50,
            swipe_pause: Duration::from_millis(500),
            processing_pause: Duration::from_secs(1),
        }
    }
}

impl SessionOptions {
    /// Options with all pauses zeroed, for tests and `--fast` runs.
    pub fn fast() -> Self {
        SessionOptions {
            swipe_pause: Duration::ZERO,
            processing_pause: Duration::ZERO,
            ..SessionOptions::default()
        }
    }
}

/// Session states. Transitions are documented on the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    CatalogDisplay,
    SelectItem,
    ChoosePayment,
    SettleCash,
    SettleCredit,
    Continuation,
    Ended,
}

/// One continuous interactive run, from initial catalog display to
/// termination.
pub struct Session<R, W> {
    machine: VendingMachine,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(machine: VendingMachine, input: R, output: W, options: SessionOptions) -> Self {
        Session {
            machine,
            input,
            output,
            options,
        }
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    /// Consumes the session, releasing the machine for inspection.
    pub fn into_machine(self) -> VendingMachine {
        self.machine
    }

    /// Runs the state machine until the customer ends the session.
    ///
    /// # Errors
    ///
    /// - [`VendError::InputClosed`] - input ended before the session did.
    /// - [`VendError::Io`] - a console stream failed.
    pub fn run(&mut self) -> Result<(), VendError> {
        let mut state = State::CatalogDisplay;
        while state != State::Ended {
            state = self.step(state)?;
        }
        Ok(())
    }

    fn step(&mut self, state: State) -> Result<State, VendError> {
        match state {
            State::CatalogDisplay => self.show_catalog(),
            State::SelectItem => self.select_item(),
            State::ChoosePayment => self.choose_payment(),
            State::SettleCash => self.settle_cash(),
            State::SettleCredit => self.settle_credit(),
            State::Continuation => self.continuation(),
            State::Ended => Ok(State::Ended),
        }
    }

    /// Renders the banner and the full catalog, grouped by category.
    /// Re-rendering cancels any in-flight purchase.
    fn show_catalog(&mut self) -> Result<State, VendError> {
        writeln!(
            self.output,
            "{}",
            banner::render("Vending Machine", self.options.banner_width)
        )?;

        self.machine.clear_selection();

        let mut current_category = None;
        for (code, slot) in self.machine.catalog().slots() {
            if current_category != Some(slot.category) {
                writeln!(self.output, "\n*********** {} ***********", slot.category)?;
                current_category = Some(slot.category);
            }
            writeln!(self.output, "[{}] - {}", code, slot.item)?;
        }

        Ok(State::SelectItem)
    }

    /// Prompts for item codes until one selects an in-stock item.
    fn select_item(&mut self) -> Result<State, VendError> {
        loop {
            // A parse failure yields no code and funnels into the
            // no-such-item branch, same as an unknown code.
            let code = self
                .read_item_code()?
                .and_then(|raw| usize::try_from(raw).ok());

            let Some(code) = code else {
                writeln!(
                    self.output,
                    "No such item available. Please select from menu."
                )?;
                continue;
            };

            match self.machine.select(code) {
                Ok(item) => {
                    writeln!(self.output, "Selection: {item}")?;
                    return Ok(State::ChoosePayment);
                }
                Err(PurchaseError::OutOfStock) => {
                    if let Some(item) = self.machine.catalog().get(code) {
                        writeln!(
                            self.output,
                            "Sorry! {} out of stock. Please select another item.",
                            item.name
                        )?;
                    }
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "No such item available. Please select from menu."
                    )?;
                }
            }
        }
    }

    /// Prompts until the customer names a supported payment type.
    fn choose_payment(&mut self) -> Result<State, VendError> {
        loop {
            let choice = self
                .prompt_line("Select Payment Type (Cash or Credit): ")?
                .to_lowercase();
            match choice.as_str() {
                "cash" => return Ok(State::SettleCash),
                "credit" => return Ok(State::SettleCredit),
                _ => writeln!(self.output, "Please enter a valid payment option.")?,
            }
        }
    }

    /// Collects cash until the price is covered, then completes the sale.
    fn settle_cash(&mut self) -> Result<State, VendError> {
        let name = match self.machine.selected_item() {
            Some(item) => item.name.clone(),
            None => return Ok(State::SelectItem),
        };

        self.machine.reset_cash();

        // First tender re-prompts from scratch until it parses.
        let first = loop {
            if let Some(amount) = self.read_cash("Please enter cash amount (example: 1.25): ")? {
                break amount;
            }
        };
        self.machine.insert_cash(first);

        // Underpayment loop: ask for the remainder until covered. A parse
        // failure leaves the tendered amount unchanged and repeats.
        while let Some(remainder) = self.machine.amount_due() {
            writeln!(
                self.output,
                "Total cash inserted: ${:.2}",
                self.machine.transaction_amount()
            )?;
            writeln!(self.output, "Amount due: ${remainder:.2}")?;

            let prompt = format!("Please enter remaining sum of ${remainder:.2}: ");
            if let Some(additional) = self.read_cash(&prompt)? {
                self.machine.insert_cash(additional);
            }
        }

        let change = self.machine.settle_cash()?;
        writeln!(self.output, "Your change is: ${change:.2}")?;
        writeln!(self.output, "Enjoy your {name}!")?;

        Ok(State::Continuation)
    }

    /// Simulated card settlement; always approves.
    fn settle_credit(&mut self) -> Result<State, VendError> {
        let name = match self.machine.selected_item() {
            Some(item) => item.name.clone(),
            None => return Ok(State::SelectItem),
        };

        writeln!(self.output, "Please swipe credit card now.")?;
        self.pause(self.options.swipe_pause);

        write!(self.output, "Processing")?;
        self.output.flush()?;
        for _ in 0..4 {
            self.pause(self.options.processing_pause);
            write!(self.output, ".")?;
            self.output.flush()?;
        }

        let charged = self.machine.settle_credit()?;
        writeln!(
            self.output,
            "\nTransaction approved! Credit card charged ${charged:.2}"
        )?;
        writeln!(self.output, "Enjoy your {name}!")?;

        Ok(State::Continuation)
    }

    /// Asks whether to continue; loops until the answer is recognized.
    fn continuation(&mut self) -> Result<State, VendError> {
        loop {
            let choice = self
                .prompt_line(
                    "Would you like to make any additional purchases? (Y/N) or \"M\" to view menu: ",
                )?
                .to_lowercase();

            match choice.as_str() {
                "n" | "no" => {
                    self.machine.deactivate();
                    writeln!(self.output, "\nThanks for your purchase(s). Goodbye.")?;
                    return Ok(State::Ended);
                }
                // Resume item selection without re-rendering the catalog.
                "y" | "yes" => return Ok(State::SelectItem),
                "m" => return Ok(State::CatalogDisplay),
                _ => writeln!(
                    self.output,
                    "Please limit your response to Yes or No (Y/N/M)."
                )?,
            }
        }
    }

    /// Prints `prompt` without a newline, flushes, and reads one trimmed
    /// line. End-of-input is terminal.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, VendError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(VendError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads one line as an integer item code. On a parse failure, prints
    /// the type message and returns `None`; the caller owns retry policy.
    fn read_item_code(&mut self) -> Result<Option<i64>, VendError> {
        let line = self.prompt_line("Please enter an item code: ")?;
        match line.parse::<i64>() {
            Ok(code) => Ok(Some(code)),
            Err(_) => {
                writeln!(self.output, "Please enter a int type.")?;
                Ok(None)
            }
        }
    }

    /// Reads one line as a decimal cash amount, same contract as
    /// [`Self::read_item_code`].
    fn read_cash(&mut self, prompt: &str) -> Result<Option<Decimal>, VendError> {
        let line = self.prompt_line(prompt)?;
        match line.parse::<Decimal>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Please enter a float type.")?;
                Ok(None)
            }
        }
    }

    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<(), VendError>, VendingMachine, String) {
        let machine = VendingMachine::new(Catalog::standard());
        let mut output = Vec::new();
        let mut session = Session::new(
            machine,
            Cursor::new(script.to_string()),
            &mut output,
            SessionOptions::fast(),
        );
        let result = session.run();
        let machine = session.into_machine();
        (result, machine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prompt_strings_are_verbatim() {
        let (_, _, output) = run_script("0\ncash\n1.00\nno\n");
        assert!(output.contains("Please enter an item code: "));
        assert!(output.contains("Select Payment Type (Cash or Credit): "));
        assert!(output.contains("Please enter cash amount (example: 1.25): "));
        assert!(output.contains(
            "Would you like to make any additional purchases? (Y/N) or \"M\" to view menu: "
        ));
    }

    #[test]
    fn input_closed_at_first_prompt() {
        let (result, machine, _) = run_script("");
        assert!(matches!(result, Err(VendError::InputClosed)));
        assert!(machine.is_active());
    }

    #[test]
    fn whitespace_around_input_is_tolerated() {
        let (result, machine, _) = run_script("  0  \n CASH \n 1.00 \n NO \n");
        assert!(result.is_ok());
        assert_eq!(machine.balance(), rust_decimal_macros::dec!(1.00));
    }
}
