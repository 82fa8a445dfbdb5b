//! Delivery-partner endpoints.

use pindrop_domain::{ApiRequest, DeliveryStatus, Order};
use serde_json::Value;

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/delivery` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> DeliveryApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /delivery/status`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn status(&self) -> ApiResult<DeliveryStatus> {
        self.client
            .send_json(ApiRequest::get("/delivery/status"))
            .await
    }

    /// `PUT /delivery/availability`: flips availability and returns the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn toggle_availability(&self) -> ApiResult<DeliveryStatus> {
        self.client
            .send_json(ApiRequest::put("/delivery/availability"))
            .await
    }

    /// `GET /delivery/orders`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn assigned_orders(&self) -> ApiResult<Vec<Order>> {
        self.client
            .send_json(ApiRequest::get("/delivery/orders"))
            .await
    }

    /// `PUT /delivery/orders/{id}/deliver`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn mark_delivered(&self, order_id: i64) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::put(format!(
                "/delivery/orders/{order_id}/deliver"
            )))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::api::testing::api_as;
    use pindrop_domain::{HttpMethod, Role};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_status_and_toggle() {
        let (transport, api) = api_as(Some(Role::Delivery));
        transport.respond(200, json!({"availability": true, "pin_code": "560001"}));
        transport.respond(200, json!({"availability": false}));

        let before = api.delivery().status().await.unwrap();
        let after = api.delivery().toggle_availability().await.unwrap();

        assert!(before.availability);
        assert_eq!(before.pin_code.as_deref(), Some("560001"));
        assert!(!after.availability);
        assert_eq!(transport.requests()[1].method, HttpMethod::Put);
    }

    #[tokio::test]
    async fn test_mark_delivered_path() {
        let (transport, api) = api_as(Some(Role::Delivery));
        transport.respond(200, json!([]));

        assert!(api.delivery().assigned_orders().await.unwrap().is_empty());
        api.delivery().mark_delivered(44).await.unwrap();

        assert_eq!(
            transport.last_request().unwrap().path,
            "/delivery/orders/44/deliver"
        );
    }
}
