//! Session store: the single source of truth for who is logged in.

mod store;

pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
