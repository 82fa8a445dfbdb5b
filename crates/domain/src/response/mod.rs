//! API response types

mod spec;

pub use spec::{ApiResponse, NOT_FOUND, UNAUTHORIZED};
