//! PinDrop Domain - Core marketplace types
//!
//! This crate defines the domain model for the PinDrop client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod marketplace;
pub mod request;
pub mod response;
pub mod role;
pub mod routing;
pub mod session;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use error::{DomainError, DomainResult};
pub use marketplace::{
    CartItem, CartSummary, CheckoutRequest, Complaint, ComplaintStatus, ComplaintUpdate,
    DeliveryStatus, Dish, NewDish, NewRestaurant, Notification, Offer, Order, OrderItem,
    OrderStatus, OwnerAction, PaymentMode, PlatformStats, Restaurant, RestaurantStatus,
};
pub use request::{ApiRequest, HttpMethod};
pub use response::ApiResponse;
pub use role::{NavLink, Role};
pub use routing::{
    DEFAULT_PATH, LOGIN_PATH, RouteAccess, RouteDef, access_for, guard, resolve_route,
    route_path,
};
pub use session::{Session, User};
