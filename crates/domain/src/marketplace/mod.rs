//! Marketplace records exchanged with the API.
//!
//! Field names follow the server's snake_case JSON. Status fields are open
//! enums: known wire strings map to variants, anything else is preserved in
//! an `Other` variant so a new server-side status never breaks decoding.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Declares a string-backed status enum that round-trips unknown values.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A status this client does not know about.
            Other(String),
        }

        impl $name {
            /// Returns the wire string of the status.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                status.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod cart;
mod complaint;
mod order;
mod platform;
mod restaurant;

pub use cart::{CartItem, CartSummary, CheckoutRequest, DELIVERY_FEE, PLATFORM_FEE, PaymentMode};
pub use complaint::{Complaint, ComplaintStatus, ComplaintUpdate};
pub use order::{Order, OrderItem, OrderStatus, OwnerAction};
pub use platform::{DeliveryStatus, Notification, Offer, PlatformStats};
pub use restaurant::{DEFAULT_RESTAURANT_FEE, Dish, NewDish, NewRestaurant, Restaurant, RestaurantStatus};

/// Parses a server timestamp.
///
/// Accepts RFC 3339 with an offset, or a naive ISO 8601 date-time which is
/// taken to be UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
