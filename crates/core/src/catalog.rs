//! The fixed, read-only product catalog.

use rust_decimal::Decimal;

use crate::types::product::Product;

/// The storefront's product catalog.
///
/// The catalog is an ordered, immutable product list built once per process.
/// There is no mutation path: total count and contents are constant for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the demo catalog: the three hardcoded products the storefront
    /// sells.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            demo_product(
                "blazer",
                "Blazer",
                "Vestibulum dignissim augue ultrices felis fermentum tempus. Phasellus et \
                 nisi sodales, sagittis neque et, fringilla nisi. Suspendisse feugiat, nisl \
                 consequat fringilla convallis, augue tortor condimentum purus, commodo justo \
                 orci sodales elit. Etiam dolor sem, convallis et elit a, scelerisque feugiat \
                 nunc.",
                50,
                "blazer.svg",
            ),
            demo_product(
                "tshirt",
                "T-Shirt",
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam vel augue \
                 ac nunc convallis tincidunt malesuada id magna. Aliquam placerat lacus eu \
                 diam sollicitudin, ullamcorper placerat tellus interdum. Vestibulum in \
                 libero fringilla, molestie dolor eu, egestas sapien.",
                30,
                "t-shirt.svg",
            ),
            demo_product(
                "shoes",
                "Shoes",
                "Donec nec tempus erat, a auctor est. Pellentesque vestibulum interdum mi, \
                 eget consequat risus vehicula vel. Donec consectetur nisi arcu, congue \
                 cursus nulla auctor at. Maecenas imperdiet ipsum vitae tristique dictum. \
                 Nullam suscipit blandit tellus ut accumsan.",
                80,
                "shoes.svg",
            ),
        ];

        Self { products }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by SKU.
    ///
    /// Returns `None` for an unknown SKU; never panics.
    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.sku() == sku)
    }

    /// The number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn demo_product(sku: &str, name: &str, description: &str, price: i64, image: &str) -> Product {
    Product::new(
        sku,
        name,
        description,
        Decimal::from(price),
        Some(image.to_owned()),
    )
    .expect("demo catalog prices are valid")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("shoes").is_some());
        assert_eq!(catalog.get("shoes").unwrap().name(), "Shoes");
    }

    #[test]
    fn test_demo_catalog_order() {
        let catalog = Catalog::demo();
        let skus: Vec<&str> = catalog.products().iter().map(Product::sku).collect();
        assert_eq!(skus, vec!["blazer", "tshirt", "shoes"]);
    }

    #[test]
    fn test_get_unknown_sku() {
        let catalog = Catalog::demo();
        assert!(catalog.get("invalid-sku").is_none());
    }

    #[test]
    fn test_prices() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.get("blazer").unwrap().formatted_price("£"), "£50.00");
        assert_eq!(catalog.get("tshirt").unwrap().formatted_price("£"), "£30.00");
        assert_eq!(catalog.get("shoes").unwrap().formatted_price("£"), "£80.00");
    }
}
