//! Rental Statement CLI
//!
//! Reads a CSV rental ledger and prints one statement per customer.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- rentals.csv > statements.txt
//! cargo run -- rentals.csv --breakdown > breakdown.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use rental_statement::{RentalError, RentalLedger, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut input_path = None;
    let mut breakdown = false;

    for arg in env::args().skip(1) {
        if arg == "--breakdown" {
            breakdown = true;
        } else if arg.starts_with("--") || input_path.is_some() {
            return Err(RentalError::InvalidArgument(arg));
        } else {
            input_path = Some(arg);
        }
    }

    let input_path = input_path.ok_or(RentalError::MissingArgument)?;
    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let mut ledger = RentalLedger::new();
    ledger.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    let aborted = if breakdown {
        ledger.write_breakdown(handle)?
    } else {
        ledger.write_statements(handle)?
    };

    if aborted > 0 {
        return Err(RentalError::StatementsAborted { count: aborted });
    }

    Ok(())
}
