//! Restaurant-owner endpoints.

use pindrop_domain::{ApiRequest, Dish, NewDish, Offer, Order, OrderStatus, Restaurant};
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/owner` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OwnerApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> OwnerApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /owner/restaurant`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error; a 404 means no restaurant is registered
    /// for this owner yet.
    pub async fn restaurant(&self) -> ApiResult<Restaurant> {
        self.client
            .send_json(ApiRequest::get("/owner/restaurant"))
            .await
    }

    /// `GET /owner/dishes`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn dishes(&self) -> ApiResult<Vec<Dish>> {
        self.client.send_json(ApiRequest::get("/owner/dishes")).await
    }

    /// `POST /owner/dishes`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn add_dish(&self, dish: &NewDish) -> ApiResult<Value> {
        let request = ApiRequest::post("/owner/dishes").json(dish)?;
        self.client.send_value(request).await
    }

    /// `PUT /owner/dishes/{id}` with the full dish record.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update_dish(&self, dish: &Dish) -> ApiResult<Value> {
        let request = ApiRequest::put(format!("/owner/dishes/{}", dish.id)).json(dish)?;
        self.client.send_value(request).await
    }

    /// `GET /owner/orders`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn orders(&self) -> ApiResult<Vec<Order>> {
        self.client.send_json(ApiRequest::get("/owner/orders")).await
    }

    /// `PUT /owner/orders/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update_order_status(&self, order_id: i64, status: &OrderStatus) -> ApiResult<Value> {
        let request = ApiRequest::put(format!("/owner/orders/{order_id}/status"))
            .json(&json!({"status": status}))?;
        self.client.send_value(request).await
    }

    /// `GET /owner/offers`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn offers(&self) -> ApiResult<Vec<Offer>> {
        self.client.send_json(ApiRequest::get("/owner/offers")).await
    }

    /// `POST /owner/offers` with a server-defined offer body.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn create_offer(&self, offer: &Value) -> ApiResult<Value> {
        let request = ApiRequest::post("/owner/offers").json(offer)?;
        self.client.send_value(request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::api::testing::api_as;
    use crate::error::ApiError;
    use pindrop_domain::{Dish, HttpMethod, NewDish, OrderStatus, Role};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_restaurant_is_not_found() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(404, json!({"detail": "Restaurant not found"}));

        let error = api.owner().restaurant().await.unwrap_err();

        assert!(error.is_not_found());
        assert!(api.session().current().is_some());
    }

    #[tokio::test]
    async fn test_order_status_update_body() {
        let (transport, api) = api_as(Some(Role::Owner));

        api.owner()
            .update_order_status(18, &OrderStatus::OutForDelivery)
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.path, "/owner/orders/18/status");
        assert_eq!(sent.body, Some(json!({"status": "Out for Delivery"})));
    }

    #[tokio::test]
    async fn test_dish_create_and_toggle() {
        let (transport, api) = api_as(Some(Role::Owner));
        let dish = Dish {
            id: 6,
            restaurant_id: 2,
            name: "Vada".to_string(),
            description: None,
            price: 35.0,
            availability: true,
            image_path: None,
        };

        api.owner()
            .add_dish(&NewDish {
                restaurant_id: 2,
                name: "Vada".to_string(),
                description: String::new(),
                price: 35.0,
                availability: true,
                image_path: None,
            })
            .await
            .unwrap();
        api.owner().update_dish(&dish.toggled()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/owner/dishes");
        assert_eq!(requests[0].body.as_ref().unwrap()["image_path"], json!(null));
        assert_eq!(requests[1].path, "/owner/dishes/6");
        assert_eq!(requests[1].body.as_ref().unwrap()["availability"], json!(false));
    }

    #[tokio::test]
    async fn test_expired_session_on_owner_orders() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(401, json!({"detail": "Token expired"}));

        let error = api.owner().orders().await.unwrap_err();

        assert!(matches!(error, ApiError::AuthenticationExpired));
        assert!(api.session().current().is_none());
    }

    #[tokio::test]
    async fn test_offers_round() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(200, json!([]));

        let offers = api.owner().offers().await.unwrap();
        api.owner()
            .create_offer(&json!({"code": "LUNCH10", "discount_percent": 10}))
            .await
            .unwrap();

        assert!(offers.is_empty());
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.path, "/owner/offers");
    }
}
