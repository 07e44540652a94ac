//! # Payment Methods
//!
//! Payment settlement as a tagged variant matched exhaustively at
//! settlement time: adding a method means adding a variant and one match
//! arm. Settlement is simulated and never fails for a non-negative
//! amount, which the cart invariants guarantee.

use crate::product::Price;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Payment method chosen at checkout time. Carries no state beyond the
/// checkout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Simulated credit card charge
    CreditCard,
    /// Simulated mobile wallet transfer (GCash and friends)
    MobileWallet,
    /// Buyer pays the courier on delivery
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label used on receipts and menus
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::MobileWallet => "Mobile Wallet",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Settle the given amount and return a confirmation message for the
    /// caller to display. No real charge happens anywhere in this crate.
    pub fn settle(&self, amount: Price) -> String {
        let confirmation = match self {
            PaymentMethod::CreditCard => {
                format!("Paid {} using Credit Card.", amount.display())
            }
            PaymentMethod::MobileWallet => {
                format!("Paid {} via Mobile Wallet.", amount.display())
            }
            PaymentMethod::CashOnDelivery => {
                format!("Please pay {} in cash upon delivery.", amount.display())
            }
        };

        info!("Settled {} via {}", amount.display(), self.label());
        confirmation
    }

    /// All methods, in menu order
    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::CreditCard,
            PaymentMethod::MobileWallet,
            PaymentMethod::CashOnDelivery,
        ]
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Currency;

    #[test]
    fn test_settle_messages() {
        let amount = Price::new(1050.99, Currency::PHP);

        assert_eq!(
            PaymentMethod::CreditCard.settle(amount),
            "Paid Php 1050.99 using Credit Card."
        );
        assert_eq!(
            PaymentMethod::MobileWallet.settle(amount),
            "Paid Php 1050.99 via Mobile Wallet."
        );
        assert_eq!(
            PaymentMethod::CashOnDelivery.settle(amount),
            "Please pay Php 1050.99 in cash upon delivery."
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::CreditCard.label(), "Credit Card");
        assert_eq!(PaymentMethod::MobileWallet.to_string(), "Mobile Wallet");
        assert_eq!(PaymentMethod::all().len(), 3);
    }
}
