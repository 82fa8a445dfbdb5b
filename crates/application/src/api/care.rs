//! Customer-care endpoints.

use pindrop_domain::{ApiRequest, Complaint, ComplaintStatus, ComplaintUpdate};
use serde_json::Value;

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/care` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CareApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> CareApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /care/complaints`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn complaints(&self) -> ApiResult<Vec<Complaint>> {
        self.client
            .send_json(ApiRequest::get("/care/complaints"))
            .await
    }

    /// `PUT /care/complaints/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update_complaint(
        &self,
        complaint_id: i64,
        status: ComplaintStatus,
        resolution_notes: impl Into<String>,
    ) -> ApiResult<Value> {
        let update = ComplaintUpdate {
            status,
            resolution_notes: resolution_notes.into(),
        };
        let request = ApiRequest::put(format!("/care/complaints/{complaint_id}")).json(&update)?;
        self.client.send_value(request).await
    }

    /// `PUT /care/orders/{id}/cancel`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn cancel_order(&self, order_id: i64) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::put(format!("/care/orders/{order_id}/cancel")))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::api::testing::api_as;
    use pindrop_domain::{ComplaintStatus, HttpMethod, Role};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_complaint_body() {
        let (transport, api) = api_as(Some(Role::Care));

        api.care()
            .update_complaint(3, ComplaintStatus::Resolved, "Refund issued")
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.path, "/care/complaints/3");
        assert_eq!(
            sent.body,
            Some(json!({"status": "Resolved", "resolution_notes": "Refund issued"}))
        );
    }

    #[tokio::test]
    async fn test_cancel_order_failure_detail() {
        let (transport, api) = api_as(Some(Role::Care));
        transport.respond(400, json!({"detail": "Order already delivered"}));

        let error = api.care().cancel_order(9).await.unwrap_err();

        assert_eq!(error.detail_or("Cancel failed."), "Order already delivered");
        assert_eq!(transport.last_request().unwrap().path, "/care/orders/9/cancel");
    }
}
