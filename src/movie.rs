//! Movie and tariff category models.

use crate::error::RentalError;
use std::fmt;
use std::str::FromStr;

/// Pricing class of a movie. Selects both the price and the loyalty point rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TariffCategory {
    /// Standard catalog title.
    Regular,

    /// Recently released title, charged per day from day one.
    NewRelease,

    /// Children's title with a flat rate for short rentals.
    Childrens,
}

impl TariffCategory {
    /// Canonical price code tag for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            TariffCategory::Regular => "REGULAR",
            TariffCategory::NewRelease => "NEW RELEASE",
            TariffCategory::Childrens => "CHILDRENS",
        }
    }
}

impl fmt::Display for TariffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a price code tag.
///
/// Matching is case-insensitive and accepts `_` or `-` in place of the space
/// in `NEW RELEASE`. Anything else is an [`RentalError::InvalidCategory`].
impl FromStr for TariffCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase().replace(['_', '-'], " ");

        match tag.as_str() {
            "REGULAR" => Ok(TariffCategory::Regular),
            "NEW RELEASE" | "NEWRELEASE" => Ok(TariffCategory::NewRelease),
            "CHILDRENS" => Ok(TariffCategory::Childrens),
            _ => Err(RentalError::InvalidCategory {
                tag: s.trim().to_string(),
            }),
        }
    }
}

/// A catalog title. Immutable once created; rentals share it rather than copy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    category: TariffCategory,
}

impl Movie {
    pub fn new(title: impl Into<String>, category: TariffCategory) -> Self {
        Movie {
            title: title.into(),
            category,
        }
    }

    /// Creates a movie from a textual price code, failing on unknown codes.
    pub fn with_price_code(title: impl Into<String>, price_code: &str) -> crate::Result<Self> {
        let category = price_code.parse()?;
        Ok(Movie::new(title, category))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> TariffCategory {
        self.category
    }
}
