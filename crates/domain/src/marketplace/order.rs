//! Orders and the owner's status workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

wire_enum! {
    /// Lifecycle status of an order.
    OrderStatus {
        /// Submitted by the customer.
        Placed => "Placed",
        /// Accepted by the restaurant.
        Accepted => "Accepted",
        /// Being cooked.
        Preparing => "Preparing",
        /// Handed to a delivery partner.
        OutForDelivery => "Out for Delivery",
        /// Delivered to the customer.
        Delivered => "Delivered",
        /// Rejected by the restaurant.
        Rejected => "Rejected",
        /// Cancelled by customer care.
        Cancelled => "Cancelled",
    }
}

/// A status change the restaurant owner may apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerAction {
    /// Button label.
    pub label: &'static str,
    /// Status the order moves to.
    pub next: OrderStatus,
}

impl OwnerAction {
    const fn new(label: &'static str, next: OrderStatus) -> Self {
        Self { label, next }
    }
}

impl OrderStatus {
    /// Status changes the owner may apply from this status.
    #[must_use]
    pub fn owner_actions(&self) -> Vec<OwnerAction> {
        match self {
            Self::Placed => vec![
                OwnerAction::new("ACCEPT", Self::Accepted),
                OwnerAction::new("REJECT", Self::Rejected),
            ],
            Self::Accepted => vec![OwnerAction::new("START COOKING", Self::Preparing)],
            Self::Preparing => vec![OwnerAction::new("HAND OVER TO RIDER", Self::OutForDelivery)],
            _ => Vec::new(),
        }
    }

    /// Returns true if the owner may move an order from this status to `next`.
    #[must_use]
    pub fn owner_can_transition_to(&self, next: &Self) -> bool {
        self.owner_actions().iter().any(|a| &a.next == next)
    }

    /// Label shown to the customer.
    #[must_use]
    pub fn customer_label(&self) -> &str {
        match self {
            Self::Placed => "Order Placed",
            Self::Preparing => "Cooking",
            Self::OutForDelivery => "On the Way",
            other => other.as_str(),
        }
    }

    /// Returns true once no further transition is expected.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Delivered | Self::Rejected | Self::Cancelled)
    }
}

/// A line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Ordered dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<i64>,
    /// Dish display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at order time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// An order as seen by customers, owners and delivery partners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id.
    pub id: i64,
    /// Amount charged.
    pub total_amount: f64,
    /// Current status.
    pub order_status: OrderStatus,
    /// Ordered lines.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Restaurant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// Customer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Assigned delivery partner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_partner_name: Option<String>,
    /// Creation time as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Order {
    /// Parsed creation time, if present and well-formed.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Partner to show as "on their way": only while not yet delivered.
    #[must_use]
    pub fn en_route_partner(&self) -> Option<&str> {
        (self.order_status != OrderStatus::Delivered)
            .then_some(self.delivery_partner_name.as_deref())
            .flatten()
    }
}
