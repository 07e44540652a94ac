//! # Shop Error Types
//!
//! Typed error handling for the storefront core.
//! All cart, checkout and account operations return `Result<T, ShopError>`.

use thiserror::Error;

/// Core error type for all storefront operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    /// Quantity below 1 passed to a cart mutation
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity { quantity: i64 },

    /// Cart mutation targeted a product that is not in the cart
    #[error("Product {product_id} is not in the cart")]
    ItemNotInCart { product_id: u32 },

    /// A cart line references a product the catalog cannot resolve.
    /// The catalog is immutable for the process lifetime, so this is
    /// an invariant violation rather than a recoverable condition.
    #[error("Product {product_id} is no longer in the catalog")]
    UnknownItem { product_id: u32 },

    /// Checkout attempted on an empty cart
    #[error("Cart is empty. Add items before checkout")]
    EmptyCart,

    /// Checkout attempted before a shipping address was set
    #[error("No shipping address set for this user")]
    MissingShippingAddress,

    /// Registration with a username that is already taken
    #[error("Username '{username}' already exists. Please log in instead")]
    DuplicateUsername { username: String },

    /// Username or password shorter than the minimum length
    #[error("{field} must be at least 3 characters long")]
    WeakCredential { field: &'static str },

    /// Email without a non-edge '@' followed by a non-trailing '.'
    #[error("Invalid email format: {email}")]
    InvalidEmailFormat { email: String },

    /// Login with a username/password pair that matches no account
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Catalog file problems (missing fields, bad TOML)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ShopError {
    /// Returns true if this error signals a broken invariant rather
    /// than bad user input. Callers should treat these as bugs.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ShopError::UnknownItem { .. })
    }
}

/// Result type alias for storefront operations
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_classification() {
        assert!(ShopError::UnknownItem { product_id: 9 }.is_invariant_violation());
        assert!(!ShopError::EmptyCart.is_invariant_violation());
        assert!(!ShopError::InvalidQuantity { quantity: 0 }.is_invariant_violation());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ShopError::InvalidQuantity { quantity: -2 }.to_string(),
            "Invalid quantity: -2 (must be at least 1)"
        );
        assert_eq!(
            ShopError::WeakCredential { field: "Password" }.to_string(),
            "Password must be at least 3 characters long"
        );
        assert_eq!(
            ShopError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }
}
