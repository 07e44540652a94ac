//! # shop-core
//!
//! Core types for the storefront-rs checkout flow.
//!
//! This crate provides:
//! - `Catalog` and `Product` for the session product catalog
//! - `Cart` with quantity-accumulating lines and deterministic ordering
//! - `PaymentMethod` as a tagged variant settled by exhaustive match
//! - `checkout` orchestrating validation, settlement and receipt assembly
//! - `AccountDirectory` for registration and login
//! - `ShopError` for typed error handling
//!
//! The crate is synchronous and does no I/O beyond parsing catalog TOML;
//! prompting, menus and display belong to the presentation layer.
//!
//! ## Example
//!
//! ```rust
//! use shop_core::{checkout, Cart, Catalog, Currency, PaymentMethod, Price, Product, User};
//!
//! let catalog = Catalog::new(Currency::PHP)
//!     .with_product(Product::new(1, "Laptop", Price::new(999.99, Currency::PHP)));
//!
//! let mut cart = Cart::new();
//! cart.add(catalog.get(1).unwrap(), 1).unwrap();
//!
//! let user = User {
//!     username: "alice".into(),
//!     email: "a@b.com".into(),
//!     shipping_address: Some("Manila".into()),
//! };
//!
//! let outcome = checkout(&cart, &catalog, &user, PaymentMethod::CreditCard).unwrap();
//! println!("{}", outcome.receipt);
//! cart.clear();
//! ```

pub mod account;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod payment;
pub mod product;
pub mod receipt;

// Re-exports for convenience
pub use account::{is_valid_email, AccountDirectory, User};
pub use cart::{Cart, CartLine};
pub use checkout::{checkout, CheckoutOutcome};
pub use error::{ShopError, ShopResult};
pub use payment::PaymentMethod;
pub use product::{Catalog, Currency, Price, Product};
pub use receipt::{Receipt, ReceiptLine};
