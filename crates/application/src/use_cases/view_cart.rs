//! View-cart use case.

use pindrop_domain::{CartItem, CartSummary};

use crate::api::PindropApi;
use crate::error::ApiResult;

/// The cart with its bill.
#[derive(Debug, Clone)]
pub struct ViewCartOutput {
    /// Cart lines as returned by the server.
    pub items: Vec<CartItem>,
    /// Bill computed from the lines.
    pub summary: CartSummary,
}

/// Use case for loading the cart and computing the bill.
pub struct ViewCart<'a> {
    api: &'a PindropApi,
}

impl<'a> ViewCart<'a> {
    /// Creates a new `ViewCart` use case.
    #[must_use]
    pub const fn new(api: &'a PindropApi) -> Self {
        Self { api }
    }

    /// Loads the cart.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn execute(&self) -> ApiResult<ViewCartOutput> {
        let items = self.api.customer().cart().await?;
        let summary = CartSummary::from_items(&items);
        Ok(ViewCartOutput { items, summary })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::api::testing::api_as;
    use pindrop_domain::Role;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_bill_includes_fees() {
        let (transport, api) = api_as(Some(Role::Customer));
        transport.respond(
            200,
            json!([
                {"id": 1, "dish_name": "Dosa", "dish_price": 60.0, "quantity": 2, "restaurant_name": "Dosa Hut"},
                {"id": 2, "dish_name": "Coffee", "dish_price": 30.0, "quantity": 1}
            ]),
        );

        let output = ViewCart::new(&api).execute().await.unwrap();

        assert_eq!(output.items.len(), 2);
        assert_eq!(output.summary.subtotal, 150.0);
        assert_eq!(output.summary.total, 180.0);
        assert_eq!(output.summary.restaurant_name.as_deref(), Some("Dosa Hut"));
    }

    #[tokio::test]
    async fn test_empty_cart_costs_nothing() {
        let (transport, api) = api_as(Some(Role::Customer));
        transport.respond(200, json!([]));

        let output = ViewCart::new(&api).execute().await.unwrap();

        assert_eq!(output.summary.total, 0.0);
    }
}
