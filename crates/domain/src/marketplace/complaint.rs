//! Customer complaints handled by the care team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

wire_enum! {
    /// Ticket status of a complaint.
    ComplaintStatus {
        /// Newly raised.
        Open => "Open",
        /// Picked up by an agent.
        InProgress => "In Progress",
        /// Resolved with the customer.
        Resolved => "Resolved",
        /// Closed without further action.
        Closed => "Closed",
    }
}

/// A complaint raised against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Complaint id.
    pub id: i64,
    /// Order complained about.
    pub order_id: i64,
    /// Raising customer.
    #[serde(default)]
    pub customer_id: i64,
    /// Raising customer's name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer's description.
    pub description: String,
    /// Ticket status.
    pub status: ComplaintStatus,
    /// Agent notes.
    #[serde(default)]
    pub resolution_notes: Option<String>,
    /// Creation time as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Complaint {
    /// Parsed creation time, if present and well-formed.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Payload for `PUT /care/complaints/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintUpdate {
    /// New status.
    pub status: ComplaintStatus,
    /// Agent notes; empty when only the status changes.
    pub resolution_notes: String,
}
