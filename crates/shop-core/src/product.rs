//! # Product Catalog Types
//!
//! Product and catalog types for storefront-rs.
//! The catalog is seeded once at session start (from `config/catalog.toml`
//! or a hardcoded demo set) and never mutated afterwards.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    PHP,
    USD,
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::PHP => "php",
            Currency::USD => "usd",
            Currency::EUR => "eur",
        }
    }

    /// Display prefix used on receipts and cart listings
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PHP => "Php ",
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }

    /// Number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        2
    }

    /// Convert a decimal amount to the smallest currency unit (centavos, cents)
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::PHP
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (centavos for PHP)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// Create a price from the smallest unit (centavos/cents)
    pub fn from_cents(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.amount)
    }

    /// Multiply the unit price by a quantity
    pub fn times(&self, quantity: u32) -> Price {
        Price {
            amount: self.amount * quantity as i64,
            currency: self.currency,
        }
    }

    /// Format for display (e.g., "Php 999.99")
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.as_decimal())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (>= 1, unique within the catalog)
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,

    /// Optional category (e.g., "peripherals")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether this product is available for purchase
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a new product
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: None,
            active: true,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Product catalog (seeded at session start, immutable afterwards)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Currency all prices in this catalog are quoted in
    #[serde(default)]
    pub currency: Currency,

    /// Products available this session
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            products: Vec::new(),
        }
    }

    /// Add a product during seeding
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Builder: add a product during seeding
    pub fn with_product(mut self, product: Product) -> Self {
        self.add(product);
        self
    }

    /// Find a product by ID
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Unit price of a product, or `UnknownItem` if the id does not resolve
    pub fn price_of(&self, id: u32) -> ShopResult<Price> {
        self.get(id)
            .map(|p| p.price)
            .ok_or(ShopError::UnknownItem { product_id: id })
    }

    /// All products available for purchase
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> ShopResult<Self> {
        toml::from_str(toml_str).map_err(|e| ShopError::Configuration(e.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Currency::PHP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let php = Currency::PHP;
        assert_eq!(php.to_smallest_unit(999.99), 99999);
        assert_eq!(php.from_smallest_unit(99999), 999.99);
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(25.50, Currency::PHP);
        assert_eq!(price.display(), "Php 25.50");

        let price_usd = Price::new(19.99, Currency::USD);
        assert_eq!(price_usd.display(), "$19.99");
    }

    #[test]
    fn test_price_times() {
        let price = Price::new(25.50, Currency::PHP);
        assert_eq!(price.times(2).amount, 5100);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(Currency::PHP)
            .with_product(Product::new(1, "Laptop", Price::new(999.99, Currency::PHP)))
            .with_product(Product::new(2, "Mouse", Price::new(25.50, Currency::PHP)));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "Laptop");
        assert_eq!(catalog.price_of(2).unwrap().amount, 2550);
        assert_eq!(
            catalog.price_of(99),
            Err(ShopError::UnknownItem { product_id: 99 })
        );
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_str = r#"
            currency = "php"

            [[products]]
            id = 1
            name = "Laptop"
            price = { amount = 99999, currency = "php" }
            category = "computers"

            [[products]]
            id = 2
            name = "Mouse"
            price = { amount = 2550, currency = "php" }
        "#;

        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.currency, Currency::PHP);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().category.as_deref(), Some("computers"));
        assert!(catalog.get(2).unwrap().active);
    }

    #[test]
    fn test_catalog_from_bad_toml() {
        let err = Catalog::from_toml("products = 3").unwrap_err();
        assert!(matches!(err, ShopError::Configuration(_)));
    }
}
