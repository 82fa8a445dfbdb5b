//! Platform-admin endpoints.

use pindrop_domain::{ApiRequest, NewRestaurant, Offer, PlatformStats, Restaurant};
use serde_json::Value;

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/admin` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /admin/stats`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn stats(&self) -> ApiResult<PlatformStats> {
        self.client.send_json(ApiRequest::get("/admin/stats")).await
    }

    /// `GET /admin/restaurants`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn restaurants(&self) -> ApiResult<Vec<Restaurant>> {
        self.client
            .send_json(ApiRequest::get("/admin/restaurants"))
            .await
    }

    /// `POST /admin/restaurants`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn add_restaurant(&self, restaurant: &NewRestaurant) -> ApiResult<Value> {
        let request = ApiRequest::post("/admin/restaurants").json(restaurant)?;
        self.client.send_value(request).await
    }

    /// `GET /admin/offers`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn platform_offers(&self) -> ApiResult<Vec<Offer>> {
        self.client.send_json(ApiRequest::get("/admin/offers")).await
    }

    /// `POST /admin/offers` with a server-defined offer body.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn create_platform_offer(&self, offer: &Value) -> ApiResult<Value> {
        let request = ApiRequest::post("/admin/offers").json(offer)?;
        self.client.send_value(request).await
    }
}
