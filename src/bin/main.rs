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

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use vending_demo_rs::{
    Catalog, SalesReport, Session, SessionOptions, VendError, VendingMachine,
};

/// Vending Machine - interactive command-line purchase simulator
///
/// Displays a fixed catalog on stdout and reads purchase commands line by
/// line from stdin until the customer ends the session.
#[derive(Parser, Debug)]
#[command(name = "vending-demo-rs")]
#[command(about = "An interactive command-line vending machine", long_about = None)]
struct Args {
    /// Write a JSON sales summary to this file when the session ends
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Skip the simulated credit card processing delays
    #[arg(long)]
    fast: bool,

    /// Banner width in columns
    #[arg(long, default_value_t = 50)]
    width: usize,
}

fn main() {
    let args = Args::parse();

    let catalog = Catalog::standard();
    // Kept aside so the report can diff stock sold during the session.
    let initial = catalog.clone();

    let mut options = if args.fast {
        SessionOptions::fast()
    } else {
        SessionOptions::default()
    };
    options.banner_width = args.width;

    let mut session = Session::new(
        VendingMachine::new(catalog),
        io::stdin().lock(),
        io::stdout().lock(),
        options,
    );

    match session.run() {
        Ok(()) => {}
        Err(VendError::InputClosed) => {
            eprintln!("Input closed before the session ended.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Session failed: {e}");
            process::exit(1);
        }
    }

    if let Some(path) = &args.report {
        let machine = session.into_machine();
        if let Err(e) = write_report(&machine, &initial, path) {
            eprintln!("Error writing report '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Writes the end-of-session sales summary as pretty-printed JSON.
fn write_report(
    machine: &VendingMachine,
    initial: &Catalog,
    path: &Path,
) -> io::Result<()> {
    let report = SalesReport::new(machine, initial);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()
}
