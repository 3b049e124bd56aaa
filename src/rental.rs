//! A single rental: one movie kept for a number of days.

use crate::error::{RentalError, Result};
use crate::money::Amount;
use crate::movie::Movie;
use crate::pricing;
use std::sync::Arc;

/// Binds a shared movie to a rental duration.
///
/// # Invariants
///
/// - `days_rented >= 1`; zero-day rentals are rejected at construction
/// - Immutable once created, so repeated price queries always agree
#[derive(Debug, Clone)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: u32,
}

impl Rental {
    /// Creates a rental, rejecting a zero-day duration with
    /// [`RentalError::InvalidDuration`].
    pub fn new(movie: Arc<Movie>, days_rented: u32) -> Result<Self> {
        if days_rented == 0 {
            return Err(RentalError::InvalidDuration { days: 0 });
        }

        Ok(Rental { movie, days_rented })
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Price of this rental under its movie's tariff.
    pub fn price(&self) -> Amount {
        pricing::price(self.movie.category(), self.days_rented)
    }

    /// Frequent renter points earned by this rental.
    pub fn loyalty_points(&self) -> u32 {
        pricing::loyalty_points(self.movie.category(), self.days_rented)
    }
}
