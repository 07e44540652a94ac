//! # Checkout
//!
//! Orchestrates cart validation, total computation, payment settlement,
//! and receipt assembly. Checkout never mutates the cart: the caller
//! resets it after a success, which keeps this operation idempotent and
//! safe to retry after a validation failure.

use crate::account::User;
use crate::cart::Cart;
use crate::error::{ShopError, ShopResult};
use crate::payment::PaymentMethod;
use crate::product::Catalog;
use crate::receipt::{Receipt, ReceiptLine};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Everything a completed checkout hands back to the caller
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// Settlement confirmation message for display
    pub confirmation: String,

    /// The itemized receipt
    pub receipt: Receipt,
}

/// Run a checkout for the given cart and user.
///
/// Fails with `EmptyCart` before anything else, then with
/// `MissingShippingAddress` if the user has no address set (prompting
/// for one is the caller's job). Settlement is simulated and cannot
/// fail; `UnknownItem` can only surface if a cart line stopped resolving
/// against the catalog, which the seeding rules rule out.
pub fn checkout(
    cart: &Cart,
    catalog: &Catalog,
    user: &User,
    method: PaymentMethod,
) -> ShopResult<CheckoutOutcome> {
    if cart.is_empty() {
        return Err(ShopError::EmptyCart);
    }

    let shipping_address = user
        .shipping_address
        .clone()
        .ok_or(ShopError::MissingShippingAddress)?;

    let grand_total = cart.grand_total(catalog)?;
    let confirmation = method.settle(grand_total);

    let mut lines = Vec::with_capacity(cart.lines().len());
    for line in cart.lines() {
        let product = catalog.get(line.product_id).ok_or(ShopError::UnknownItem {
            product_id: line.product_id,
        })?;
        lines.push(ReceiptLine {
            name: product.name.clone(),
            quantity: line.quantity,
            line_total: cart.line_total(line, catalog)?,
        });
    }

    let receipt = Receipt {
        id: Uuid::new_v4(),
        username: user.username.clone(),
        email: user.email.clone(),
        shipping_address,
        lines,
        grand_total,
        payment_method: method.label().to_string(),
        created_at: Utc::now(),
    };

    info!(
        "Checkout complete for '{}': {} items, total {}",
        user.username,
        cart.item_count(),
        grand_total.display()
    );

    Ok(CheckoutOutcome {
        confirmation,
        receipt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountDirectory;
    use crate::product::{Currency, Price, Product};

    fn demo_catalog() -> Catalog {
        Catalog::new(Currency::PHP)
            .with_product(Product::new(1, "Laptop", Price::new(999.99, Currency::PHP)))
            .with_product(Product::new(2, "Mouse", Price::new(25.50, Currency::PHP)))
            .with_product(Product::new(3, "Keyboard", Price::new(45.00, Currency::PHP)))
    }

    fn buyer(address: Option<&str>) -> User {
        User {
            username: "alice".to_string(),
            email: "a@b.com".to_string(),
            shipping_address: address.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        let catalog = demo_catalog();
        let cart = Cart::new();

        let err = checkout(&cart, &catalog, &buyer(Some("Manila")), PaymentMethod::CreditCard)
            .unwrap_err();
        assert_eq!(err, ShopError::EmptyCart);
    }

    #[test]
    fn test_missing_shipping_address_rejected() {
        let catalog = demo_catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(1).unwrap(), 1).unwrap();

        for method in PaymentMethod::all() {
            let err = checkout(&cart, &catalog, &buyer(None), method).unwrap_err();
            assert_eq!(err, ShopError::MissingShippingAddress);
        }
    }

    #[test]
    fn test_checkout_does_not_mutate_cart() {
        let catalog = demo_catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(2).unwrap(), 2).unwrap();

        checkout(&cart, &catalog, &buyer(Some("Manila")), PaymentMethod::MobileWallet).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_end_to_end_checkout() {
        let mut directory = AccountDirectory::new();
        directory.register("alice", "pw123", "a@b.com").unwrap();

        let catalog = demo_catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(1).unwrap(), 1).unwrap();
        cart.add(catalog.get(2).unwrap(), 2).unwrap();

        directory
            .set_shipping_address("alice", "Quezon City, Metro Manila")
            .unwrap();
        let user = directory.authenticate("alice", "pw123").unwrap();

        let outcome = checkout(&cart, &catalog, &user, PaymentMethod::CreditCard).unwrap();

        assert_eq!(outcome.confirmation, "Paid Php 1050.99 using Credit Card.");

        let receipt = &outcome.receipt;
        assert_eq!(receipt.grand_total.as_decimal(), 1050.99);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "Laptop");
        assert_eq!(receipt.lines[1].name, "Mouse");
        assert_eq!(receipt.lines[1].line_total.amount, 5100);
        assert_eq!(receipt.payment_method, "Credit Card");
        assert_eq!(receipt.username, "alice");

        // Caller resets the cart after a completed checkout
        cart.clear();
        assert!(cart.is_empty());
    }
}
