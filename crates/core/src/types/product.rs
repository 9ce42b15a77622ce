//! Products for sale on the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::price::format_price;

/// Errors that can occur when constructing a [`Product`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The price is below zero.
    #[error("price must not be negative (got {0})")]
    NegativePrice(Decimal),
    /// The price carries more than two decimal places.
    #[error("price must have at most 2 decimal places (got {0})")]
    PriceScale(Decimal),
}

/// A product for sale on the storefront.
///
/// Products are immutable values. The price is exact decimal arithmetic with
/// a fixed scale of two - construction is the only validation boundary in the
/// core, and it rejects negative prices and prices with more than two
/// decimal places.
///
/// Deserialization runs the same validation, so a `Product` rebuilt from
/// session data upholds the invariant.
///
/// ```
/// use tagshop_core::{Product, ProductError};
///
/// let shoes = Product::new("shoes", "Shoes", "", "80".parse().unwrap(), None).unwrap();
/// assert_eq!(shoes.formatted_price("£"), "£80.00");
///
/// let bad = Product::new("shoes", "Shoes", "", "1.999".parse().unwrap(), None);
/// assert!(matches!(bad, Err(ProductError::PriceScale(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductData")]
pub struct Product {
    sku: String,
    name: String,
    description: String,
    price: Decimal,
    image: Option<String>,
}

/// Wire shape of a product, before validation.
#[derive(Deserialize)]
struct ProductData {
    sku: String,
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
    #[serde(default)]
    image: Option<String>,
}

impl TryFrom<ProductData> for Product {
    type Error = ProductError;

    fn try_from(data: ProductData) -> Result<Self, Self::Error> {
        Self::new(data.sku, data.name, data.description, data.price, data.image)
    }
}

impl Product {
    /// Create a new product.
    ///
    /// The price is normalized to exactly two decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is negative or has more than two
    /// decimal places.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image: Option<String>,
    ) -> Result<Self, ProductError> {
        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(price));
        }
        if price.normalize().scale() > 2 {
            return Err(ProductError::PriceScale(price));
        }

        let mut price = price;
        price.rescale(2);

        Ok(Self {
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
            price,
            image,
        })
    }

    /// The product's unique stock-keeping unit.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The marketing copy shown on the product page.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The unit price, scale 2.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// The image file reference, if the product has one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The unit price formatted for display.
    #[must_use]
    pub fn formatted_price(&self, symbol: &str) -> String {
        format_price(self.price, symbol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_accepts_two_decimal_places() {
        let product = Product::new("abc", "test", "", decimal("435.96"), None).unwrap();
        assert_eq!(product.price(), decimal("435.96"));
    }

    #[test]
    fn test_new_rejects_three_decimal_places() {
        let result = Product::new("abc", "test", "", decimal("123.456"), None);
        assert!(matches!(result, Err(ProductError::PriceScale(_))));
    }

    #[test]
    fn test_new_rejects_negative_price() {
        let result = Product::new("abc", "test", "", decimal("-1"), None);
        assert!(matches!(result, Err(ProductError::NegativePrice(_))));
    }

    #[test]
    fn test_new_normalizes_scale() {
        let product = Product::new("abc", "test", "", decimal("50"), None).unwrap();
        assert_eq!(product.price(), decimal("50.00"));
        assert_eq!(product.price().scale(), 2);
    }

    #[test]
    fn test_new_accepts_zero() {
        let product = Product::new("abc", "test", "", Decimal::ZERO, None).unwrap();
        assert_eq!(product.price(), decimal("0.00"));
    }

    #[test]
    fn test_new_accepts_trailing_zeros() {
        // "80.10" normalizes to one place but is still a two-place price
        let product = Product::new("abc", "test", "", decimal("80.10"), None).unwrap();
        assert_eq!(product.formatted_price("£"), "£80.10");
    }

    #[test]
    fn test_formatted_price() {
        let product = Product::new("abc", "test", "", decimal("50"), None).unwrap();
        assert_eq!(product.formatted_price("£"), "£50.00");
        assert_eq!(product.formatted_price("$"), "$50.00");
    }

    #[test]
    fn test_deserialize_validates_price() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"sku":"abc","name":"test","price":"123.456"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"sku":"abc","name":"test","price":"50"}"#).unwrap();
        assert_eq!(product.description(), "");
        assert_eq!(product.image(), None);
        assert_eq!(product.price(), decimal("50.00"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let product =
            Product::new("shoes", "Shoes", "Comfy.", decimal("80"), Some("shoes.svg".to_owned()))
                .unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
