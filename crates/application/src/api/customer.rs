//! Customer endpoints: browsing, cart, checkout, orders and complaints.

use pindrop_domain::{
    ApiRequest, CartItem, CheckoutRequest, Dish, Offer, Order, PaymentMode, Restaurant,
};
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/customer` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CustomerApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> CustomerApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /customer/restaurants`: restaurants serving the customer's pin
    /// code.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn restaurants(&self) -> ApiResult<Vec<Restaurant>> {
        self.client
            .send_json(ApiRequest::get("/customer/restaurants"))
            .await
    }

    /// `GET /customer/restaurants/{id}/menu`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn menu(&self, restaurant_id: i64) -> ApiResult<Vec<Dish>> {
        self.client
            .send_json(ApiRequest::get(format!(
                "/customer/restaurants/{restaurant_id}/menu"
            )))
            .await
    }

    /// `GET /customer/cart`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn cart(&self) -> ApiResult<Vec<CartItem>> {
        self.client.send_json(ApiRequest::get("/customer/cart")).await
    }

    /// `POST /customer/cart`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn add_to_cart(&self, dish_id: i64, quantity: u32) -> ApiResult<Value> {
        let request = ApiRequest::post("/customer/cart")
            .json(&json!({"dish_id": dish_id, "quantity": quantity}))?;
        self.client.send_value(request).await
    }

    /// `DELETE /customer/cart/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn remove_from_cart(&self, item_id: i64) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::delete(format!("/customer/cart/{item_id}")))
            .await
    }

    /// `DELETE /customer/cart`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn clear_cart(&self) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::delete("/customer/cart"))
            .await
    }

    /// `GET /customer/offers`, optionally narrowed to one restaurant.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn offers(&self, restaurant_id: Option<i64>) -> ApiResult<Vec<Offer>> {
        let mut request = ApiRequest::get("/customer/offers");
        if let Some(id) = restaurant_id {
            request = request.with_query("restaurant_id", id);
        }
        self.client.send_json(request).await
    }

    /// `POST /customer/checkout`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn checkout(
        &self,
        payment_mode: PaymentMode,
        offer_id: Option<i64>,
    ) -> ApiResult<Value> {
        let request = ApiRequest::post("/customer/checkout").json(&CheckoutRequest {
            payment_mode,
            offer_id,
        })?;
        self.client.send_value(request).await
    }

    /// `GET /customer/orders`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn orders(&self) -> ApiResult<Vec<Order>> {
        self.client.send_json(ApiRequest::get("/customer/orders")).await
    }

    /// `POST /customer/orders/{id}/reorder`: copies a past order into the
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn reorder(&self, order_id: i64) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::post(format!(
                "/customer/orders/{order_id}/reorder"
            )))
            .await
    }

    /// `POST /customer/complaints`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn raise_complaint(&self, order_id: i64, description: &str) -> ApiResult<Value> {
        let request = ApiRequest::post("/customer/complaints")
            .json(&json!({"order_id": order_id, "description": description}))?;
        self.client.send_value(request).await
    }
}
