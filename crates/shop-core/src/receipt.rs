//! # Receipt Types
//!
//! The itemized record of a completed checkout. Purely derived data:
//! built once from the user snapshot, the resolved cart lines, and the
//! chosen payment method, and never mutated afterwards.

use crate::product::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One purchased item on a receipt, resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product name at purchase time
    pub name: String,

    /// Purchased quantity
    pub quantity: u32,

    /// Unit price times quantity
    pub line_total: Price,
}

/// The record of a completed checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// Buyer username
    pub username: String,

    /// Buyer email
    pub email: String,

    /// Shipping address at purchase time
    pub shipping_address: String,

    /// Purchased items in cart insertion order
    pub lines: Vec<ReceiptLine>,

    /// Sum of all line totals
    pub grand_total: Price,

    /// Label of the payment method used
    pub payment_method: String,

    /// When the checkout completed
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Receipt {
    /// Textual layout: identity block, itemized lines, grand total,
    /// payment method. Golden tests depend on this ordering.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Receipt ---")?;
        writeln!(f, "User: {}", self.username)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Shipping Address: {}", self.shipping_address)?;
        writeln!(f, "Items Purchased:")?;
        for line in &self.lines {
            writeln!(
                f,
                "- {} x{} - {}",
                line.name,
                line.quantity,
                line.line_total.display()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {}", self.grand_total.display())?;
        writeln!(f, "Payment Method: {}", self.payment_method)?;
        write!(f, "---------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Currency;

    #[test]
    fn test_receipt_rendering() {
        let receipt = Receipt {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@b.com".to_string(),
            shipping_address: "Manila, Metro Manila".to_string(),
            lines: vec![
                ReceiptLine {
                    name: "Laptop".to_string(),
                    quantity: 1,
                    line_total: Price::new(999.99, Currency::PHP),
                },
                ReceiptLine {
                    name: "Mouse".to_string(),
                    quantity: 2,
                    line_total: Price::new(51.00, Currency::PHP),
                },
            ],
            grand_total: Price::new(1050.99, Currency::PHP),
            payment_method: "Credit Card".to_string(),
            created_at: Utc::now(),
        };

        let rendered = receipt.to_string();
        let expected = "\
--- Receipt ---
User: alice
Email: a@b.com
Shipping Address: Manila, Metro Manila
Items Purchased:
- Laptop x1 - Php 999.99
- Mouse x2 - Php 51.00

Total: Php 1050.99
Payment Method: Credit Card
---------------------";
        assert_eq!(rendered, expected);
    }
}
