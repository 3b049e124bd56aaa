//! CSV rental ledger: the input side of the statement engine.
//!
//! Reads rows of `customer,title,category,days`, interns movies by title and
//! groups rentals per customer in first-seen order. Rows are processed in
//! file order, which is also the order of each customer's statement lines.

use crate::error::{RentalError, Result};
use crate::money::Amount;
use crate::movie::{Movie, TariffCategory};
use crate::rental::Rental;
use crate::statement::{compute_statement, Statement};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

/// Raw rental row as read from CSV.
///
/// Every field is read as text so that a bad category or duration can still
/// be attributed to its customer.
#[derive(Debug, Deserialize)]
pub struct RentalRecord {
    pub customer: String,
    pub title: String,
    pub category: String,
    pub days: String,
}

impl RentalRecord {
    /// Validates the row into a typed rental request.
    pub fn parse(&self, row: usize) -> Result<ParsedRental> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(RentalError::InvalidRecord {
                row,
                message: "missing movie title".to_string(),
            });
        }

        let category = self.category.parse::<TariffCategory>()?;
        let days_rented = parse_days(&self.days, row)?;

        Ok(ParsedRental {
            title: title.to_string(),
            category,
            days_rented,
        })
    }
}

/// Parses the days field; non-positive values are an invalid duration.
fn parse_days(raw: &str, row: usize) -> Result<u32> {
    let days: i64 = raw
        .trim()
        .parse()
        .map_err(|_| RentalError::InvalidRecord {
            row,
            message: format!("days '{}' is not a whole number", raw.trim()),
        })?;

    u32::try_from(days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or(RentalError::InvalidDuration { days })
}

/// A validated rental row, before its movie is resolved.
#[derive(Debug, Clone)]
pub struct ParsedRental {
    pub title: String,
    pub category: TariffCategory,
    pub days_rented: u32,
}

/// One customer's rentals, or the error that aborted their statement.
#[derive(Debug)]
pub struct CustomerRentals {
    name: String,
    rentals: std::result::Result<Vec<Rental>, RentalError>,
}

impl CustomerRentals {
    fn new(name: String) -> Self {
        CustomerRentals {
            name,
            rentals: Ok(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rentals in ledger order, or the first error recorded for this customer.
    pub fn rentals(&self) -> std::result::Result<&[Rental], &RentalError> {
        self.rentals.as_deref()
    }

    /// Builds this customer's statement. No partial statement is produced
    /// for an aborted customer.
    pub fn statement(&self) -> std::result::Result<Statement, &RentalError> {
        self.rentals()
            .map(|rentals| compute_statement(&self.name, rentals))
    }

    fn push(&mut self, rental: Rental) {
        if let Ok(rentals) = &mut self.rentals {
            rentals.push(rental);
        }
    }

    /// Marks this customer as aborted, keeping only the first error.
    fn abort(&mut self, err: RentalError) {
        if self.rentals.is_ok() {
            self.rentals = Err(err);
        }
    }

    fn is_aborted(&self) -> bool {
        self.rentals.is_err()
    }
}

/// One row of the per-rental breakdown CSV.
#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    customer: &'a str,
    title: &'a str,
    price: Amount,
    points: u32,
    running_total: Amount,
    running_points: u32,
}

/// Movies and customer rentals collected from one or more CSV sources.
pub struct RentalLedger {
    /// Movies interned by title so rentals share a single instance.
    movies: HashMap<String, Arc<Movie>>,

    /// Index into `customers` by name.
    customer_index: HashMap<String, usize>,

    /// Customers in first-seen order.
    customers: Vec<CustomerRentals>,
}

impl RentalLedger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        RentalLedger {
            movies: HashMap::new(),
            customer_index: HashMap::new(),
            customers: Vec::new(),
        }
    }

    /// Reads rental rows from a CSV reader.
    ///
    /// Rows are read as raw records first so that a malformed row can still
    /// be attributed to its customer. Any invalid row with a readable
    /// customer (wrong field count, wrong header, bad category, duration or
    /// title) aborts that customer's statement. Rows without a customer are
    /// logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let customer_column = headers
            .iter()
            .position(|h| h == "customer")
            .unwrap_or(0);

        for (row_idx, result) in csv_reader.records().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            let customer = raw.get(customer_column).unwrap_or_default().to_string();
            if customer.is_empty() {
                warn!("Row {}: Missing customer name, ignoring", row_num);
                continue;
            }

            let record = if raw.len() != headers.len() {
                Err(RentalError::InvalidRecord {
                    row: row_num,
                    message: format!("expected {} fields, found {}", headers.len(), raw.len()),
                })
            } else {
                raw.deserialize::<RentalRecord>(Some(&headers))
                    .map_err(|e| RentalError::InvalidRecord {
                        row: row_num,
                        message: e.to_string(),
                    })
            };

            self.process_record(&customer, record, row_num);
        }

        Ok(())
    }

    fn process_record(&mut self, customer: &str, record: Result<RentalRecord>, row: usize) {
        let index = self.customer_slot(customer);
        if self.customers[index].is_aborted() {
            debug!(
                "Row {}: Ignoring rental for aborted customer {}",
                row, customer
            );
            return;
        }

        let rental = record
            .and_then(|record| record.parse(row))
            .and_then(|parsed| self.add_rental(parsed));

        match rental {
            Ok(rental) => {
                debug!(
                    "Row {}: {} rented '{}' for {} days",
                    row,
                    customer,
                    rental.movie().title(),
                    rental.days_rented()
                );
                self.customers[index].push(rental);
            }
            Err(e) => {
                warn!("Row {}: Aborting statement for {}: {}", row, customer, e);
                self.customers[index].abort(e);
            }
        }
    }

    /// Returns the index of a customer, registering them on first sight.
    fn customer_slot(&mut self, name: &str) -> usize {
        if let Some(&index) = self.customer_index.get(name) {
            return index;
        }

        let index = self.customers.len();
        self.customers.push(CustomerRentals::new(name.to_string()));
        self.customer_index.insert(name.to_string(), index);
        index
    }

    /// Resolves the movie for a parsed row and creates the rental.
    fn add_rental(&mut self, parsed: ParsedRental) -> Result<Rental> {
        let movie = match self.movies.get(&parsed.title) {
            Some(existing) if existing.category() != parsed.category => {
                return Err(RentalError::ConflictingCategory {
                    title: parsed.title,
                    existing: existing.category(),
                    requested: parsed.category,
                });
            }
            Some(existing) => Arc::clone(existing),
            None => {
                let movie = Arc::new(Movie::new(parsed.title.clone(), parsed.category));
                self.movies.insert(parsed.title, Arc::clone(&movie));
                movie
            }
        };

        Rental::new(movie, parsed.days_rented)
    }

    /// Customers in first-seen order.
    pub fn customers(&self) -> &[CustomerRentals] {
        &self.customers
    }

    /// Looks up a registered movie by title.
    pub fn movie(&self, title: &str) -> Option<&Arc<Movie>> {
        self.movies.get(title)
    }

    /// Writes every customer's rendered statement, separated by blank lines.
    ///
    /// Unlike [`crate::render_statement`], the output ends with a newline
    /// after the last statement, so it reads as a complete text stream.
    ///
    /// Aborted customers are logged at error level and skipped. Returns the
    /// number of aborted statements.
    pub fn write_statements<W: Write>(&self, mut writer: W) -> Result<usize> {
        let mut aborted = 0;
        let mut first = true;

        for customer in &self.customers {
            match customer.statement() {
                Ok(statement) => {
                    if !first {
                        writeln!(writer)?;
                        writeln!(writer)?;
                    }
                    write!(writer, "{}", statement)?;
                    first = false;
                }
                Err(e) => {
                    error!("Statement for {} aborted: {}", customer.name(), e);
                    aborted += 1;
                }
            }
        }

        if !first {
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(aborted)
    }

    /// Writes one CSV row per statement line with running totals.
    ///
    /// Aborted customers are logged at error level and skipped. Returns the
    /// number of aborted statements.
    pub fn write_breakdown<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        let mut aborted = 0;

        // Header is written explicitly so it is present even with no rows
        csv_writer.write_record([
            "customer",
            "title",
            "price",
            "points",
            "running_total",
            "running_points",
        ])?;

        for customer in &self.customers {
            let statement = match customer.statement() {
                Ok(statement) => statement,
                Err(e) => {
                    error!("Statement for {} aborted: {}", customer.name(), e);
                    aborted += 1;
                    continue;
                }
            };

            for line in &statement.lines {
                csv_writer.serialize(BreakdownRow {
                    customer: &statement.customer_name,
                    title: &line.movie_title,
                    price: line.rental_price,
                    points: line.points,
                    running_total: line.running_total,
                    running_points: line.running_points,
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(aborted)
    }
}

impl Default for RentalLedger {
    fn default() -> Self {
        Self::new()
    }
}
