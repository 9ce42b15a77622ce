//! The session-stored shopping basket.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::price::format_price;
use crate::types::product::Product;

/// Errors that can occur when rebuilding a [`Basket`] from session data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// A basket entry is keyed by a SKU other than its product's.
    #[error("basket entry for key {key} holds product {sku}")]
    SkuMismatch {
        /// The map key the line was stored under.
        key: String,
        /// The SKU of the product actually held by the line.
        sku: String,
    },
}

/// Which way a basket mutation moves a line's quantity.
///
/// Exactly two symbols exist, serialized as `"+"` and `"-"` - the payload
/// format the storefront JS posts. A missing operation means [`Increase`].
///
/// [`Increase`]: Operation::Increase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Add to the line's quantity.
    #[default]
    #[serde(rename = "+")]
    Increase,
    /// Subtract from the line's quantity.
    #[serde(rename = "-")]
    Decrease,
}

/// One product-plus-quantity entry within a basket.
///
/// A line carries the full product, not just the SKU, so the basket page can
/// be redisplayed from session data alone without a fresh catalog lookup.
/// Lines never hold a zero quantity - a line that would reach zero is removed
/// from the basket instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketLine {
    product: Product,
    quantity: u32,
}

impl BasketLine {
    /// Create a new line.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product this line holds.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// How many units of the product the line holds.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The line's total price: quantity x unit price, exact decimal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.product.price()
    }

    /// The line's total price formatted for display.
    #[must_use]
    pub fn formatted_total(&self, symbol: &str) -> String {
        format_price(self.line_total(), symbol)
    }
}

/// The set of product lines a session intends to purchase.
///
/// A basket maps SKUs to [`BasketLine`]s. It is created empty per session,
/// mutated only through [`apply`], serialized into the session after every
/// mutation, and discarded on clear or once the order confirmation has been
/// shown.
///
/// Invariants: every key equals its line's product SKU, and no line has a
/// zero quantity. Both are enforced on mutation and re-checked when a basket
/// is deserialized from session data - a key/SKU mismatch is an error, and
/// zero-quantity lines are pruned.
///
/// [`apply`]: Basket::apply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BasketData")]
pub struct Basket {
    lines: HashMap<String, BasketLine>,
}

/// Wire shape of a basket, before validation.
#[derive(Deserialize)]
struct BasketData {
    #[serde(default)]
    lines: HashMap<String, BasketLine>,
}

impl TryFrom<BasketData> for Basket {
    type Error = BasketError;

    fn try_from(data: BasketData) -> Result<Self, Self::Error> {
        for (key, line) in &data.lines {
            if key != line.product().sku() {
                return Err(BasketError::SkuMismatch {
                    key: key.clone(),
                    sku: line.product().sku().to_owned(),
                });
            }
        }
        let lines = data
            .lines
            .into_iter()
            .filter(|(_, line)| line.quantity() > 0)
            .collect();
        Ok(Self { lines })
    }
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff the basket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The number of lines in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line for `sku`, if one is present.
    #[must_use]
    pub fn line(&self, sku: &str) -> Option<&BasketLine> {
        self.lines.get(sku)
    }

    /// Iterate over the basket's lines in unspecified order.
    pub fn lines(&self) -> impl Iterator<Item = &BasketLine> {
        self.lines.values()
    }

    /// The basket's lines sorted by SKU, for deterministic display.
    #[must_use]
    pub fn sorted_lines(&self) -> Vec<&BasketLine> {
        let mut lines: Vec<&BasketLine> = self.lines.values().collect();
        lines.sort_by(|a, b| a.product().sku().cmp(b.product().sku()));
        lines
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.values().map(BasketLine::quantity).sum()
    }

    /// The total price of the basket: the sum of all line totals, 0 when
    /// empty.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.values().map(BasketLine::line_total).sum()
    }

    /// The total price formatted for display.
    #[must_use]
    pub fn formatted_total(&self, symbol: &str) -> String {
        format_price(self.total_price(), symbol)
    }

    /// Apply a quantity change to the basket.
    ///
    /// The SKU must resolve through the catalog; an unknown SKU leaves the
    /// basket unchanged. If the SKU is not yet in the basket, a line starts
    /// at quantity 0 before the delta is applied. A resulting quantity of 0
    /// (decreases floor there) removes the line entirely - negative
    /// quantities never persist.
    ///
    /// `change_quantity` is unbounded; a decrease larger than the held
    /// quantity clears the line, which is how the storefront's remove button
    /// works.
    pub fn apply(
        &mut self,
        catalog: &Catalog,
        sku: &str,
        operation: Operation,
        change_quantity: u32,
    ) {
        let Some(product) = catalog.get(sku) else {
            return;
        };

        let current = self.lines.get(sku).map_or(0, BasketLine::quantity);
        let quantity = match operation {
            Operation::Increase => current.saturating_add(change_quantity),
            Operation::Decrease => current.saturating_sub(change_quantity),
        };

        if quantity == 0 {
            self.lines.remove(sku);
        } else {
            self.lines
                .insert(sku.to_owned(), BasketLine::new(product.clone(), quantity));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(sku: &str, price: &str) -> Product {
        Product::new(sku, sku.to_uppercase(), "", price.parse().unwrap(), None).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::demo()
    }

    #[test]
    fn test_apply_creates_line_at_quantity_one() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.line("shoes").unwrap().quantity(), 1);
    }

    #[test]
    fn test_apply_increments_existing_line() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);

        assert_eq!(basket.line("shoes").unwrap().quantity(), 2);
    }

    #[test]
    fn test_apply_custom_change_quantity() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);
        basket.apply(&catalog(), "shoes", Operation::Increase, 3);

        assert_eq!(basket.line("shoes").unwrap().quantity(), 4);
    }

    #[test]
    fn test_apply_decrease_to_zero_removes_line() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 4);
        basket.apply(&catalog(), "shoes", Operation::Decrease, 4);

        assert!(basket.line("shoes").is_none());
        assert!(basket.is_empty());
    }

    #[test]
    fn test_apply_decrease_past_zero_removes_line() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);
        basket.apply(&catalog(), "shoes", Operation::Decrease, 3);

        assert!(basket.line("shoes").is_none());
        assert!(basket.is_empty());
    }

    #[test]
    fn test_apply_partial_decrease_keeps_line() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 5);
        basket.apply(&catalog(), "shoes", Operation::Decrease, 2);

        assert_eq!(basket.line("shoes").unwrap().quantity(), 3);
    }

    #[test]
    fn test_apply_unknown_sku_is_noop() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);

        let before = basket.clone();
        basket.apply(&catalog(), "unknown-sku", Operation::Increase, 1);

        assert_eq!(basket, before);
    }

    #[test]
    fn test_apply_decrease_on_absent_sku_is_noop() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Decrease, 1);

        assert!(basket.is_empty());
    }

    #[test]
    fn test_two_products_two_lines() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);
        basket.apply(&catalog(), "tshirt", Operation::Increase, 1);

        assert_eq!(basket.len(), 2);
        assert_eq!(basket.line("shoes").unwrap().quantity(), 2);
        assert_eq!(basket.line("tshirt").unwrap().quantity(), 1);

        basket.apply(&catalog(), "unknown-sku", Operation::Increase, 1);
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_line_total() {
        let line = BasketLine::new(product("abc", "20"), 5);
        assert_eq!(line.line_total(), "100.00".parse().unwrap());
    }

    #[test]
    fn test_total_price_empty_basket_is_zero() {
        let basket = Basket::new();
        assert_eq!(basket.total_price(), Decimal::ZERO);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut lines = HashMap::new();
        lines.insert("abc".to_owned(), BasketLine::new(product("abc", "20"), 5));
        lines.insert("def".to_owned(), BasketLine::new(product("def", "30"), 3));
        let basket = Basket { lines };

        assert_eq!(basket.total_price(), "190.00".parse().unwrap());
        assert_eq!(basket.formatted_total("£"), "£190.00");
        assert_eq!(basket.formatted_total("$"), "$190.00");
    }

    #[test]
    fn test_total_quantity() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 2);
        basket.apply(&catalog(), "tshirt", Operation::Increase, 3);

        assert_eq!(basket.total_quantity(), 5);
    }

    #[test]
    fn test_sorted_lines_order() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "tshirt", Operation::Increase, 1);
        basket.apply(&catalog(), "blazer", Operation::Increase, 1);
        basket.apply(&catalog(), "shoes", Operation::Increase, 1);

        let skus: Vec<&str> = basket
            .sorted_lines()
            .iter()
            .map(|line| line.product().sku())
            .collect();
        assert_eq!(skus, vec!["blazer", "shoes", "tshirt"]);
    }

    #[test]
    fn test_operation_wire_format() {
        assert_eq!(serde_json::to_string(&Operation::Increase).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&Operation::Decrease).unwrap(), "\"-\"");
        let op: Operation = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(op, Operation::Decrease);
    }

    #[test]
    fn test_deserialize_rejects_sku_mismatch() {
        let json = r#"{"lines":{"shoes":{"product":{"sku":"tshirt","name":"T-Shirt","price":"30"},"quantity":1}}}"#;
        let result: Result<Basket, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_prunes_zero_quantity_lines() {
        let json = r#"{"lines":{"shoes":{"product":{"sku":"shoes","name":"Shoes","price":"80"},"quantity":0}}}"#;
        let basket: Basket = serde_json::from_str(json).unwrap();
        assert!(basket.is_empty());
    }

    #[test]
    fn test_deserialize_empty_object() {
        let basket: Basket = serde_json::from_str("{}").unwrap();
        assert!(basket.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut basket = Basket::new();
        basket.apply(&catalog(), "shoes", Operation::Increase, 2);
        basket.apply(&catalog(), "blazer", Operation::Increase, 1);

        let json = serde_json::to_string(&basket).unwrap();
        let parsed: Basket = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, basket);
    }
}
