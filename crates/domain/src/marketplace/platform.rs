//! Platform statistics, delivery status, offers and notifications.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    /// Orders ever placed.
    pub total_orders: u64,
    /// Revenue over all orders.
    pub total_revenue: f64,
    /// Registered restaurants.
    pub total_restaurants: u64,
    /// Registered customers.
    pub total_customers: u64,
    /// Registered delivery partners.
    pub total_delivery_partners: u64,
    /// Order count per status string.
    pub orders_by_status: BTreeMap<String, u64>,
}

/// Availability of a delivery partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    /// Whether the partner accepts assignments.
    pub availability: bool,
    /// Pin code served; absent in toggle responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
}

/// A restaurant or platform offer.
///
/// The server owns the offer schema; only the id is interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer id.
    pub id: i64,
    /// Remaining server-defined fields.
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

/// A notification for the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification id.
    pub id: i64,
    /// Message text.
    #[serde(default)]
    pub message: Option<String>,
    /// Whether it has been read.
    #[serde(default)]
    pub is_read: bool,
    /// Remaining server-defined fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let stats: PlatformStats = serde_json::from_value(json!({
            "total_orders": 10,
            "total_revenue": 2500.5,
            "orders_by_status": {"Placed": 3, "Delivered": 7}
        }))
        .expect("parses");

        assert_eq!(stats.total_orders, 10);
        assert_eq!(stats.total_revenue, 2500.5);
        assert_eq!(stats.total_customers, 0);
        assert_eq!(stats.orders_by_status.get("Delivered"), Some(&7));
    }

    #[test]
    fn test_toggle_response_has_no_pin_code() {
        let status: DeliveryStatus =
            serde_json::from_value(json!({"availability": false})).expect("parses");
        assert!(!status.availability);
        assert!(status.pin_code.is_none());
    }

    #[test]
    fn test_offer_keeps_unknown_fields() {
        let offer: Offer = serde_json::from_value(json!({
            "id": 5,
            "code": "FEAST50",
            "discount_percent": 50
        }))
        .expect("parses");

        assert_eq!(offer.id, 5);
        assert_eq!(offer.details.get("code"), Some(&json!("FEAST50")));
    }
}
