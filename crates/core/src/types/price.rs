//! Price formatting and currency configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The display currency for the storefront.
///
/// The demo defaults to GBP. Both fields are injected into every rendered
/// page: the symbol for visible prices, the ISO 4217 code for the dataLayer
/// ecommerce events the tag manager consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code (e.g., "GBP").
    pub code: String,
    /// Symbol prepended to formatted amounts (e.g., "£").
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "GBP".to_owned(),
            symbol: "£".to_owned(),
        }
    }
}

/// Format a decimal amount as a display price.
///
/// The symbol is prepended and the amount is fixed to exactly two decimal
/// places.
///
/// ```
/// use rust_decimal::Decimal;
/// use tagshop_core::format_price;
///
/// assert_eq!(format_price(Decimal::from(190), "£"), "£190.00");
/// assert_eq!(format_price(Decimal::from(190), "$"), "$190.00");
/// ```
#[must_use]
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}
