//! Marketplace roles and their navigation menus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Role tag carried by an authenticated user.
///
/// Roles only gate access and select the navigation menu; they carry no
/// behavior of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Restaurant owner.
    Owner,
    /// Ordering customer.
    Customer,
    /// Delivery partner.
    Delivery,
    /// Customer-care agent.
    Care,
}

/// A single entry of a role's navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Label shown in the menu.
    pub name: &'static str,
    /// Route the entry points at.
    pub path: &'static str,
}

const fn link(name: &'static str, path: &'static str) -> NavLink {
    NavLink { name, path }
}

const ADMIN_LINKS: &[NavLink] = &[
    link("Analytics", "/admin"),
    link("Restaurants", "/admin/restaurants"),
];

const OWNER_LINKS: &[NavLink] = &[
    link("Kitchen", "/owner"),
    link("Manage Menu", "/owner/dishes"),
    link("Live Orders", "/owner/orders"),
];

const CUSTOMER_LINKS: &[NavLink] = &[
    link("Order Now", "/customer"),
    link("My Cart", "/customer/cart"),
    link("History", "/customer/orders"),
    link("Help Center", "/customer/complaints"),
];

const DELIVERY_LINKS: &[NavLink] = &[link("Runners", "/delivery")];

const CARE_LINKS: &[NavLink] = &[link("Complaints", "/care")];

impl Role {
    /// Returns all roles, in registration-form order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Customer,
            Self::Owner,
            Self::Delivery,
            Self::Care,
            Self::Admin,
        ]
    }

    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Owner => "owner",
            Self::Customer => "customer",
            Self::Delivery => "delivery",
            Self::Care => "care",
        }
    }

    /// Landing route after a successful login or registration.
    #[must_use]
    pub const fn home_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Owner => "/owner",
            Self::Customer => "/customer",
            Self::Delivery => "/delivery",
            Self::Care => "/care",
        }
    }

    /// Navigation menu shown to this role.
    #[must_use]
    pub const fn nav_links(self) -> &'static [NavLink] {
        match self {
            Self::Admin => ADMIN_LINKS,
            Self::Owner => OWNER_LINKS,
            Self::Customer => CUSTOMER_LINKS,
            Self::Delivery => DELIVERY_LINKS,
            Self::Care => CARE_LINKS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            "customer" => Ok(Self::Customer),
            "delivery" => Ok(Self::Delivery),
            "care" => Ok(Self::Care),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}
