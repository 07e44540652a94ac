//! # Cart Types
//!
//! Shopping cart for one session. Lines are kept in insertion order so
//! cart listings and receipts render deterministically; accumulating into
//! or removing a line never reorders the remaining lines.

use crate::error::{ShopError, ShopResult};
use crate::product::{Catalog, Price, Product};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A line in the cart: one product id, requested quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product ID (must resolve in the session catalog)
    pub product_id: u32,

    /// Requested quantity (>= 1)
    pub quantity: u32,
}

/// Shopping cart for one session.
///
/// At most one line exists per product id: adding a product that is
/// already present accumulates its quantity instead of duplicating the
/// line. The cart holds ids only; prices and names are resolved against
/// the session [`Catalog`] at read time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// Fails with `InvalidQuantity` if `quantity` is 0. If the product is
    /// already in the cart its quantity accumulates; otherwise a new line
    /// is appended.
    pub fn add(&mut self, product: &Product, quantity: u32) -> ShopResult<()> {
        if quantity < 1 {
            return Err(ShopError::InvalidQuantity {
                quantity: quantity as i64,
            });
        }

        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product_id: product.id,
                quantity,
            }),
        }

        debug!("Added {} x {} to cart", quantity, product.name);
        Ok(())
    }

    /// Remove a line from the cart.
    ///
    /// Fails with `ItemNotInCart` if no line has that product id; the
    /// cart is left unchanged on failure.
    pub fn remove(&mut self, product_id: u32) -> ShopResult<()> {
        let pos = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(ShopError::ItemNotInCart { product_id })?;

        self.lines.remove(pos);
        debug!("Removed product {} from cart", product_id);
        Ok(())
    }

    /// Replace the quantity on an existing line (no accumulation).
    ///
    /// Fails with `ItemNotInCart` if the product is absent and with
    /// `InvalidQuantity` if `new_quantity` is 0.
    pub fn update_quantity(&mut self, product_id: u32, new_quantity: u32) -> ShopResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or(ShopError::ItemNotInCart { product_id })?;

        if new_quantity < 1 {
            return Err(ShopError::InvalidQuantity {
                quantity: new_quantity as i64,
            });
        }

        line.quantity = new_quantity;
        Ok(())
    }

    /// Total for one line, resolved against the catalog.
    ///
    /// `UnknownItem` here means a cart line references a product the
    /// catalog cannot resolve, which the seeding rules make impossible.
    pub fn line_total(&self, line: &CartLine, catalog: &Catalog) -> ShopResult<Price> {
        Ok(catalog.price_of(line.product_id)?.times(line.quantity))
    }

    /// Grand total over all lines. Zero for an empty cart.
    pub fn grand_total(&self, catalog: &Catalog) -> ShopResult<Price> {
        let mut total = Price::zero(catalog.currency);
        for line in &self.lines {
            total.amount += self.line_total(line, catalog)?.amount;
        }
        Ok(total)
    }

    /// Check if the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Reset the cart to empty. Called by the session after a completed
    /// checkout; checkout itself never mutates the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
