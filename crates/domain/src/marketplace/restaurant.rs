//! Restaurants and their dishes.

use serde::{Deserialize, Serialize};

/// Fee pre-filled when an admin registers a restaurant.
pub const DEFAULT_RESTAURANT_FEE: f64 = 40.0;

wire_enum! {
    /// Listing status of a restaurant.
    RestaurantStatus {
        /// Accepting orders.
        Active => "active",
        /// Hidden from customers.
        Inactive => "inactive",
    }
}

impl Default for RestaurantStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A restaurant listed on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Owning user id.
    #[serde(default)]
    pub owner_id: i64,
    /// Listing status.
    #[serde(default)]
    pub status: RestaurantStatus,
    /// Pin code served.
    pub pin_code: String,
    /// Per-order restaurant fee.
    #[serde(default)]
    pub restaurant_fee: f64,
}

/// Payload for `POST /admin/restaurants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    /// Display name.
    pub name: String,
    /// Owning user id.
    pub owner_id: i64,
    /// Listing status.
    pub status: RestaurantStatus,
    /// Pin code served.
    pub pin_code: String,
    /// Per-order restaurant fee.
    pub restaurant_fee: f64,
}

impl NewRestaurant {
    /// Creates an active restaurant with the default fee.
    #[must_use]
    pub fn new(name: impl Into<String>, owner_id: i64, pin_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_id,
            status: RestaurantStatus::Active,
            pin_code: pin_code.into(),
            restaurant_fee: DEFAULT_RESTAURANT_FEE,
        }
    }
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Dish id.
    pub id: i64,
    /// Restaurant the dish belongs to.
    pub restaurant_id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Whether the dish can currently be ordered.
    pub availability: bool,
    /// Optional image URL.
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Dish {
    /// Returns a copy with availability flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            availability: !self.availability,
            ..self.clone()
        }
    }
}

/// Payload for `POST /owner/dishes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDish {
    /// Restaurant the dish belongs to.
    pub restaurant_id: i64,
    /// Display name.
    pub name: String,
    /// Description, possibly empty.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Whether the dish can be ordered right away.
    pub availability: bool,
    /// Optional image URL; sent as `null` when absent.
    pub image_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_owner_restaurant_subset_parses() {
        let restaurant: Restaurant =
            serde_json::from_value(json!({"id": 4, "name": "Dosa Hut", "pin_code": "560001"}))
                .expect("parses");
        assert_eq!(restaurant.status, RestaurantStatus::Active);
        assert_eq!(restaurant.owner_id, 0);
    }

    #[test]
    fn test_new_restaurant_defaults() {
        let payload = NewRestaurant::new("Dosa Hut", 9, "560001");
        let value = serde_json::to_value(&payload).expect("serializes");
        assert_eq!(value["status"], "active");
        assert_eq!(value["restaurant_fee"], 40.0);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = RestaurantStatus::from("suspended");
        assert_eq!(status, RestaurantStatus::Other("suspended".to_string()));
        assert_eq!(status.to_string(), "suspended");
    }

    #[test]
    fn test_dish_toggle_and_null_image() {
        let dish = Dish {
            id: 1,
            restaurant_id: 2,
            name: "Idli".to_string(),
            description: None,
            price: 30.0,
            availability: true,
            image_path: None,
        };
        assert!(!dish.toggled().availability);

        let new_dish = NewDish {
            restaurant_id: 2,
            name: "Vada".to_string(),
            description: String::new(),
            price: 25.0,
            availability: true,
            image_path: None,
        };
        let value = serde_json::to_value(&new_dish).expect("serializes");
        assert!(value["image_path"].is_null());
    }
}
