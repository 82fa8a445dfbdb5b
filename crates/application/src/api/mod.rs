//! Typed endpoint catalogue, grouped by role namespace.
//!
//! Each namespace is a thin view over the [`AuthenticatedClient`]: one
//! method per REST endpoint, no batching and no client-side logic beyond
//! building the path and body.

mod admin;
mod auth;
mod care;
mod customer;
mod delivery;
mod owner;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use care::CareApi;
pub use customer::CustomerApi;
pub use delivery::DeliveryApi;
pub use owner::OwnerApi;

use std::sync::Arc;

use crate::pipeline::AuthenticatedClient;
use crate::ports::HttpTransport;
use crate::session::SessionStore;

/// Entry point to the marketplace API.
#[derive(Debug, Clone)]
pub struct PindropApi {
    client: AuthenticatedClient,
}

impl PindropApi {
    /// Creates the API over `transport`, authenticating with `session`.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<SessionStore>) -> Self {
        Self {
            client: AuthenticatedClient::new(transport, session),
        }
    }

    /// The underlying pipeline.
    #[must_use]
    pub const fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    /// Login, registration and notifications.
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.client)
    }

    /// Customer endpoints.
    #[must_use]
    pub const fn customer(&self) -> CustomerApi<'_> {
        CustomerApi::new(&self.client)
    }

    /// Restaurant-owner endpoints.
    #[must_use]
    pub const fn owner(&self) -> OwnerApi<'_> {
        OwnerApi::new(&self.client)
    }

    /// Delivery-partner endpoints.
    #[must_use]
    pub const fn delivery(&self) -> DeliveryApi<'_> {
        DeliveryApi::new(&self.client)
    }

    /// Platform-admin endpoints.
    #[must_use]
    pub const fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(&self.client)
    }

    /// Customer-care endpoints.
    #[must_use]
    pub const fn care(&self) -> CareApi<'_> {
        CareApi::new(&self.client)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::PindropApi;
    use crate::session::SessionStore;
    use crate::test_support::{MemoryStorage, MockTransport, user};
    use pindrop_domain::Role;

    pub fn api_as(role: Option<Role>) -> (Arc<MockTransport>, PindropApi) {
        let transport = Arc::new(MockTransport::default());
        let session = Arc::new(SessionStore::open(Arc::new(MemoryStorage::default())));
        if let Some(role) = role {
            session.set_auth(user(role), "abc").unwrap();
        }
        (transport.clone(), PindropApi::new(transport, session))
    }
}
