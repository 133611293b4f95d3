//! String-backed price representation.
//!
//! Prices in Pomelo are captured as display strings at the moment a product
//! enters the cart (e.g. `"19.99"`) and are never re-fetched from the
//! catalog, so later catalog price changes do not affect lines already in
//! the cart. The string form is the stored representation; [`Price::amount`]
//! parses it to a [`Decimal`] only when arithmetic is needed.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price, string-encoded to avoid floating-point display drift.
///
/// No validation is performed on construction: the cart trusts its
/// in-process caller, and a malformed price simply contributes nothing to
/// totals. See [`Price::amount`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Create a price from its display string, e.g. `"10.00"`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the price as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Price` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse the price into a [`Decimal`] for arithmetic.
    ///
    /// Returns `None` if the stored string is not a valid decimal number.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        Decimal::from_str(&self.0).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Price {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
