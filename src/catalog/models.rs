//! Catalog Domain Models
//!
//! This module contains the product record and its identifier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// =============================================================================
// Product Identifier
// =============================================================================

/// Stable identifier of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when raw text is not a well-formed product identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not a valid product id")]
pub struct ParseProductIdError {
    pub input: String,
}

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // u32::from_str accepts a leading '+', which is not an id.
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseProductIdError { input: s.to_string() });
        }

        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ParseProductIdError { input: s.to_string() })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price, never negative
    pub price: Decimal,
    /// Image URI
    pub image: String,
}
