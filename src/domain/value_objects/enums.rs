//! # Domain Enums
//!
//! Enumeration types for catalog concepts.
//!
//! - [`Category`] - The six content collections of the catalog
//! - [`SortOrder`] - Ordering applied when listing a collection
//!
//! Both implement `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six independently stored content collections.
///
/// The declaration order is the fixed assembly order of the featured
/// response: service, tour, package, rental, hotel, resort.
///
/// # Examples
///
/// ```
/// use travel_catalog::domain::value_objects::enums::Category;
///
/// let tour: Category = "tours".parse().unwrap();
/// assert_eq!(tour, Category::Tour);
/// assert_eq!(tour.collection(), "tours");
/// assert_eq!(tour.to_string(), "tour");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Category {
    /// Agency services (visa help, transfers, guides).
    Service = 0,
    /// Guided tours.
    Tour = 1,
    /// Bundled travel packages.
    Package = 2,
    /// Vehicle and equipment rentals.
    Rental = 3,
    /// Hotels.
    Hotel = 4,
    /// Resorts.
    Resort = 5,
}

impl Category {
    /// All categories in response assembly order.
    pub const ALL: [Self; 6] = [
        Self::Service,
        Self::Tour,
        Self::Package,
        Self::Rental,
        Self::Hotel,
        Self::Resort,
    ];

    /// Returns the singular key used in the featured response.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Tour => "tour",
            Self::Package => "package",
            Self::Rental => "rental",
            Self::Hotel => "hotel",
            Self::Resort => "resort",
        }
    }

    /// Returns the plural collection name, used in API paths and storage.
    #[inline]
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Service => "services",
            Self::Tour => "tours",
            Self::Package => "packages",
            Self::Rental => "rentals",
            Self::Hotel => "hotels",
            Self::Resort => "resorts",
        }
    }

    /// Returns the position of this category in [`Category::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    /// Accepts singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower || c.collection() == lower)
            .ok_or_else(|| ParseEnumError::InvalidValue("Category", s.to_string()))
    }
}

/// Ordering applied when listing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// The store's natural order (insertion order).
    #[default]
    Natural,
    /// Most recent `createdAt` first.
    Recent,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => write!(f, "natural"),
            Self::Recent => write!(f, "recent"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "natural" => Ok(Self::Natural),
            "recent" | "-createdat" => Ok(Self::Recent),
            _ => Err(ParseEnumError::InvalidValue("SortOrder", s.to_string())),
        }
    }
}

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
