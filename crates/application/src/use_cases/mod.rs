//! Application use cases (multi-step flows over the endpoint catalogue).

mod advance_order;
mod sign_in;
mod view_cart;

pub use advance_order::*;
pub use sign_in::*;
pub use view_cart::*;
