//! Port adapters.

mod location_navigator;
mod reqwest_transport;

pub use location_navigator::LocationNavigator;
pub use reqwest_transport::ReqwestTransport;
