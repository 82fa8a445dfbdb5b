//! PinDrop Application - Session handling and the authenticated API
//!
//! This crate holds the client's core behaviour: the session store, the
//! request pipeline that authenticates every call, the boundary that reacts
//! to expired sessions, and the typed endpoint catalogue. I/O happens only
//! through the traits in [`ports`].

pub mod api;
pub mod boundary;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use api::{AdminApi, AuthApi, CareApi, CustomerApi, DeliveryApi, OwnerApi, PindropApi};
pub use boundary::SessionExpiryBoundary;
pub use error::{ApiError, ApiResult, SessionError};
pub use pipeline::AuthenticatedClient;
pub use session::SessionStore;
