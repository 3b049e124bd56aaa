//! # Rental Statement
//!
//! Prices video rentals, awards frequent renter points and renders the
//! customer statement.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Prices are `rust_decimal` values rendered in their
//!   shortest form (`3`, `6.5`, `24.5`)
//! - **Closed tariffs**: Every [`TariffCategory`] is matched exhaustively;
//!   unknown price codes fail with [`RentalError::InvalidCategory`]
//! - **Strict invariants**: A statement's totals always equal the sum of its lines
//! - **Pure computation**: Statements are recomputed from the rentals on every call
//!
//! ## Example
//!
//! ```
//! use rental_statement::{print_statement, Movie, Rental, TariffCategory};
//! use std::sync::Arc;
//!
//! let gladiator = Arc::new(Movie::new("Gladiator", TariffCategory::NewRelease));
//! let rentals = vec![Rental::new(gladiator, 5).unwrap()];
//!
//! assert_eq!(
//!     print_statement("John Smith", &rentals),
//!     "Rental record for John Smith\n\tGladiator\t15\nAmount owed is 15\n\
//!      You earned 2 frequent renter points."
//! );
//! ```

pub mod error;
pub mod ledger;
pub mod money;
pub mod movie;
pub mod pricing;
pub mod rental;
pub mod statement;

pub use error::{RentalError, Result};
pub use ledger::{CustomerRentals, RentalLedger, RentalRecord};
pub use money::Amount;
pub use movie::{Movie, TariffCategory};
pub use rental::Rental;
pub use statement::{compute_statement, print_statement, render_statement, RentalLine, Statement};
