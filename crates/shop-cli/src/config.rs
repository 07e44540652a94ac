//! # CLI Configuration
//!
//! Command-line flags and catalog loading for the storefront binary.
//! The catalog comes from a TOML file; when none is found the demo
//! catalog is seeded so the program stays usable out of the box.

use anyhow::Context;
use clap::Parser;
use shop_core::{Catalog, Currency, Price, Product};
use tracing::{info, warn};

/// Console storefront with a simulated checkout flow
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct CliConfig {
    /// Path to the catalog TOML file (defaults to $STOREFRONT_CATALOG)
    #[arg(long)]
    pub catalog: Option<String>,
}

impl CliConfig {
    /// Parse flags, reading a `.env` file first if one is present
    pub fn from_args() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    /// Explicit catalog path: the flag wins, then the environment
    pub fn catalog_path(&self) -> Option<String> {
        self.catalog
            .clone()
            .or_else(|| std::env::var("STOREFRONT_CATALOG").ok())
    }
}

/// Candidate catalog paths tried when no `--catalog` flag is given
const DEFAULT_CATALOG_PATHS: [&str; 3] = [
    "config/catalog.toml",
    "../config/catalog.toml",
    "../../config/catalog.toml",
];

/// Load the session catalog.
///
/// An explicitly given path must exist and parse; the default paths fall
/// back to the built-in demo catalog when no file is found.
pub fn load_catalog(config: &CliConfig) -> anyhow::Result<Catalog> {
    if let Some(path) = config.catalog_path() {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file {}", path))?;
        let catalog =
            Catalog::from_toml(&content).with_context(|| format!("Failed to parse {}", path))?;
        info!("Loaded {} products from {}", catalog.len(), path);
        return Ok(catalog);
    }

    for path in DEFAULT_CATALOG_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = Catalog::from_toml(&content)
                .with_context(|| format!("Failed to parse {}", path))?;
            info!("Loaded {} products from {}", catalog.len(), path);
            return Ok(catalog);
        }
    }

    warn!("No catalog file found, seeding demo catalog");
    Ok(demo_catalog())
}

/// The built-in demo catalog
pub fn demo_catalog() -> Catalog {
    Catalog::new(Currency::PHP)
        .with_product(
            Product::new(1, "Laptop", Price::new(999.99, Currency::PHP))
                .with_category("computers"),
        )
        .with_product(
            Product::new(2, "Mouse", Price::new(25.50, Currency::PHP))
                .with_category("peripherals"),
        )
        .with_product(
            Product::new(3, "Keyboard", Price::new(45.00, Currency::PHP))
                .with_category("peripherals"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_seed() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.currency, Currency::PHP);
        assert_eq!(catalog.get(1).unwrap().name, "Laptop");
        assert_eq!(catalog.get(2).unwrap().price.amount, 2550);
        assert_eq!(catalog.get(3).unwrap().name, "Keyboard");
    }

    #[test]
    fn test_missing_explicit_catalog_fails() {
        let config = CliConfig {
            catalog: Some("/nonexistent/catalog.toml".to_string()),
        };
        assert!(load_catalog(&config).is_err());
    }
}
