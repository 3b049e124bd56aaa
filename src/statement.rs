//! Statement computation and rendering.
//!
//! A statement is recomputed from the customer's rentals on every call. The
//! running totals live only inside [`compute_statement`], so computing twice
//! from the same rentals yields identical results.

use crate::money::Amount;
use crate::rental::Rental;
use log::debug;
use serde::Serialize;
use std::fmt;

/// One rental's contribution to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalLine {
    pub movie_title: String,

    pub rental_price: Amount,

    /// Points earned by this rental alone.
    pub points: u32,

    /// Amount owed after this rental, including all earlier lines.
    pub running_total: Amount,

    /// Points earned after this rental, including all earlier lines.
    pub running_points: u32,
}

/// A customer's priced rentals and their totals.
///
/// # Invariants
///
/// - `total_amount` is the sum of every line's `rental_price`
/// - `frequent_renter_points` is the sum of every line's `points`
/// - Lines appear in the order the rentals were supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub customer_name: String,
    pub lines: Vec<RentalLine>,
    pub total_amount: Amount,
    pub frequent_renter_points: u32,
}

/// Prices every rental in order and accumulates the totals in a single pass.
pub fn compute_statement(customer_name: &str, rentals: &[Rental]) -> Statement {
    let lines: Vec<RentalLine> = rentals
        .iter()
        .scan((Amount::ZERO, 0u32), |(total, points), rental| {
            let rental_price = rental.price();
            let earned = rental.loyalty_points();
            *total += rental_price;
            *points += earned;

            Some(RentalLine {
                movie_title: rental.movie().title().to_string(),
                rental_price,
                points: earned,
                running_total: *total,
                running_points: *points,
            })
        })
        .collect();

    let (total_amount, frequent_renter_points) = lines
        .last()
        .map(|line| (line.running_total, line.running_points))
        .unwrap_or((Amount::ZERO, 0));

    debug!(
        "Statement for {}: {} rentals, owed {}, {} points",
        customer_name,
        lines.len(),
        total_amount,
        frequent_renter_points
    );

    Statement {
        customer_name: customer_name.to_string(),
        lines,
        total_amount,
        frequent_renter_points,
    }
}

/// Renders the statement as text. Same output as its `Display` impl.
pub fn render_statement(statement: &Statement) -> String {
    statement.to_string()
}

/// Computes and renders a customer's statement in one step.
pub fn print_statement(customer_name: &str, rentals: &[Rental]) -> String {
    render_statement(&compute_statement(customer_name, rentals))
}

/// Header, one tab-separated line per rental, then the two footer lines.
/// There is no newline after the last footer line.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rental record for {}", self.customer_name)?;
        for line in &self.lines {
            writeln!(f, "\t{}\t{}", line.movie_title, line.rental_price)?;
        }
        writeln!(f, "Amount owed is {}", self.total_amount)?;
        write!(
            f,
            "You earned {} frequent renter points.",
            self.frequent_renter_points
        )
    }
}
