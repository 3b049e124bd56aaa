//! Tariff rules: rental price and frequent renter points per category.
//!
//! Both evaluators are pure functions of the category and the number of days
//! rented. Every category is matched explicitly, so adding one to
//! [`TariffCategory`] will not compile until it has a price and a point rule.

use crate::money::Amount;
use crate::movie::TariffCategory;

/// Days covered by the regular base price.
const REGULAR_INCLUDED_DAYS: u32 = 2;

/// Days covered by the children's flat price.
const CHILDRENS_INCLUDED_DAYS: u32 = 3;

fn regular_base() -> Amount {
    Amount::new(2, 0)
}

fn new_release_daily() -> Amount {
    Amount::new(3, 0)
}

fn childrens_base() -> Amount {
    Amount::new(15, 1)
}

/// Per-day charge beyond the included days (regular and children's).
fn overage_daily() -> Amount {
    Amount::new(15, 1)
}

/// Returns the price of renting a movie of `category` for `days_rented` days.
///
/// - Regular: 2, plus 1.5 per day beyond the second.
/// - New release: 3 per day.
/// - Children's: 1.5 up to three days. Beyond that the price is 1.5 per day
///   beyond the third, which replaces the flat price instead of adding to it
///   (four days cost the same as three).
pub fn price(category: TariffCategory, days_rented: u32) -> Amount {
    match category {
        TariffCategory::Regular => {
            if days_rented > REGULAR_INCLUDED_DAYS {
                regular_base() + overage_daily() * (days_rented - REGULAR_INCLUDED_DAYS)
            } else {
                regular_base()
            }
        }
        TariffCategory::NewRelease => new_release_daily() * days_rented,
        TariffCategory::Childrens => {
            if days_rented > CHILDRENS_INCLUDED_DAYS {
                overage_daily() * (days_rented - CHILDRENS_INCLUDED_DAYS)
            } else {
                childrens_base()
            }
        }
    }
}

/// Returns the frequent renter points earned by one rental.
///
/// New releases kept more than one day earn a bonus point.
pub fn loyalty_points(category: TariffCategory, days_rented: u32) -> u32 {
    match category {
        TariffCategory::NewRelease if days_rented > 1 => 2,
        TariffCategory::NewRelease | TariffCategory::Regular | TariffCategory::Childrens => 1,
    }
}
