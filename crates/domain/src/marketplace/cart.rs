//! Cart contents, bill summary and checkout payload.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Flat delivery fee added to every non-empty cart.
pub const DELIVERY_FEE: f64 = 25.0;

/// Flat platform fee added to every non-empty cart.
pub const PLATFORM_FEE: f64 = 5.0;

/// A line in the customer's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart line id, used for removal.
    pub id: i64,
    /// Dish in this line.
    #[serde(default)]
    pub dish_id: Option<i64>,
    /// Dish display name.
    pub dish_name: String,
    /// Unit price.
    pub dish_price: f64,
    /// Quantity ordered.
    pub quantity: u32,
    /// Restaurant the dish comes from.
    #[serde(default)]
    pub restaurant_name: Option<String>,
}

impl CartItem {
    /// Price of this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.dish_price * f64::from(self.quantity)
    }
}

/// Bill shown before checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    /// Sum of all line totals.
    pub subtotal: f64,
    /// Delivery fee; zero for an empty cart.
    pub delivery_fee: f64,
    /// Platform fee; zero for an empty cart.
    pub platform_fee: f64,
    /// Amount due.
    pub total: f64,
    /// Restaurant of the first line, if any.
    pub restaurant_name: Option<String>,
}

impl CartSummary {
    /// Computes the bill for `items`.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let (delivery_fee, platform_fee) = if items.is_empty() {
            (0.0, 0.0)
        } else {
            (DELIVERY_FEE, PLATFORM_FEE)
        };
        Self {
            subtotal,
            delivery_fee,
            platform_fee,
            total: subtotal + delivery_fee + platform_fee,
            restaurant_name: items.first().and_then(|i| i.restaurant_name.clone()),
        }
    }
}

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    /// Pay the rider in cash.
    #[default]
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    /// UPI apps.
    #[serde(rename = "UPI / PhonePe / GPay")]
    Upi,
    /// Credit or debit card.
    #[serde(rename = "Credit / Debit Card")]
    Card,
}

impl PaymentMode {
    /// Returns the wire string of the payment mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::Upi => "UPI / PhonePe / GPay",
            Self::Card => "Credit / Debit Card",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cod" | "cash" | "cash on delivery" => Ok(Self::CashOnDelivery),
            "upi" | "upi / phonepe / gpay" => Ok(Self::Upi),
            "card" | "credit / debit card" => Ok(Self::Card),
            other => Err(DomainError::UnknownPaymentMode(other.to_string())),
        }
    }
}

/// Payload for `POST /customer/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Chosen payment mode.
    pub payment_mode: PaymentMode,
    /// Offer to apply, omitted when none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<i64>,
}
