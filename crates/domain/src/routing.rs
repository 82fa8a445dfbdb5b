//! Route table and role-based access guard.
//!
//! Every page belongs to a route pattern. Public routes are open to
//! everyone; role areas list the roles allowed in. The guard compares the
//! current session against a route's allowed set and decides whether to let
//! the caller in or where to send them instead.

use crate::role::Role;
use crate::session::Session;

/// Entry point for unauthenticated users.
pub const LOGIN_PATH: &str = "/login";

/// Where a user lands when their role may not open a route.
pub const DEFAULT_PATH: &str = "/";

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// The page may be shown.
    Allow,
    /// No session: go to the login page.
    RedirectToLogin,
    /// Session role is not allowed here: go to the default route.
    RedirectToDefault,
    /// The route always forwards elsewhere.
    Forward(&'static str),
    /// No route matches the path.
    NotFound,
}

/// A route pattern and its access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Roles allowed in; `None` marks a public route.
    pub allowed_roles: Option<&'static [Role]>,
    /// Unconditional forward target.
    pub forward_to: Option<&'static str>,
}

const fn public(pattern: &'static str, title: &'static str) -> RouteDef {
    RouteDef {
        pattern,
        title,
        allowed_roles: None,
        forward_to: None,
    }
}

const fn gated(pattern: &'static str, title: &'static str, roles: &'static [Role]) -> RouteDef {
    RouteDef {
        pattern,
        title,
        allowed_roles: Some(roles),
        forward_to: None,
    }
}

const fn forward(pattern: &'static str, to: &'static str) -> RouteDef {
    RouteDef {
        pattern,
        title: "",
        allowed_roles: None,
        forward_to: Some(to),
    }
}

const ADMIN: &[Role] = &[Role::Admin];
const OWNER: &[Role] = &[Role::Owner];
const CUSTOMER: &[Role] = &[Role::Customer];
const DELIVERY: &[Role] = &[Role::Delivery];
const CARE: &[Role] = &[Role::Care];

/// All routes of the client.
pub const ROUTES: &[RouteDef] = &[
    public("/login", "Login"),
    public("/register", "Register"),
    forward("/", LOGIN_PATH),
    gated("/admin", "Platform Analytics", ADMIN),
    gated("/admin/restaurants", "Restaurants", ADMIN),
    gated("/admin/offers", "Platform Offers", ADMIN),
    gated("/owner", "My Restaurant Details", OWNER),
    gated("/owner/dishes", "Manage Menu", OWNER),
    gated("/owner/orders", "Live Orders", OWNER),
    gated("/customer", "Restaurants", CUSTOMER),
    gated("/customer/restaurants/:id/menu", "Menu", CUSTOMER),
    gated("/customer/cart", "Cart", CUSTOMER),
    gated("/customer/orders", "Orders", CUSTOMER),
    gated("/customer/complaints", "Help Center", CUSTOMER),
    gated("/delivery", "Delivery Dashboard", DELIVERY),
    forward("/delivery/status", "/delivery"),
    gated("/care", "Complaints", CARE),
    gated("/care/orders", "Order Reference", CARE),
];

impl RouteDef {
    /// Returns true if `path` matches this route's pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = route_path(path);
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let mut pattern_segments = self.pattern.split('/');
        let mut path_segments = path.split('/');
        loop {
            match (pattern_segments.next(), path_segments.next()) {
                (None, None) => return true,
                (Some(p), Some(s)) if p.starts_with(':') && !s.is_empty() => {}
                (Some(p), Some(s)) if p == s => {}
                _ => return false,
            }
        }
    }
}

/// Returns `path` without its query string and fragment.
#[must_use]
pub fn route_path(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

/// Finds the route definition for `path`.
#[must_use]
pub fn resolve_route(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.matches(path))
}

/// Checks whether `session` may open a route restricted to `allowed_roles`.
///
/// No session sends the caller to the login page; a role outside the
/// allowed set sends them to the default route. `None` for `allowed_roles`
/// admits any authenticated user.
#[must_use]
pub fn guard(session: Option<&Session>, allowed_roles: Option<&[Role]>) -> RouteAccess {
    let Some(session) = session else {
        return RouteAccess::RedirectToLogin;
    };
    match allowed_roles {
        Some(roles) if !roles.contains(&session.role()) => RouteAccess::RedirectToDefault,
        _ => RouteAccess::Allow,
    }
}

/// Resolves `path` and applies the guard for its route.
#[must_use]
pub fn access_for(session: Option<&Session>, path: &str) -> RouteAccess {
    let Some(route) = resolve_route(path) else {
        return RouteAccess::NotFound;
    };
    if let Some(target) = route.forward_to {
        return RouteAccess::Forward(target);
    }
    match route.allowed_roles {
        None => RouteAccess::Allow,
        Some(roles) => guard(session, Some(roles)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;
    use pretty_assertions::assert_eq;

    fn session(role: Role) -> Session {
        Session::new(
            User {
                id: 1,
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
                role,
                pin_code: "560001".to_string(),
            },
            "token",
        )
    }

    #[test]
    fn test_guard_without_session_redirects_to_login() {
        assert_eq!(guard(None, Some(&[Role::Admin][..])), RouteAccess::RedirectToLogin);
        assert_eq!(guard(None, None), RouteAccess::RedirectToLogin);
    }

    #[test]
    fn test_guard_role_mismatch_redirects_to_default() {
        let customer = session(Role::Customer);
        let access = guard(Some(&customer), Some(&[Role::Owner][..]));
        assert_eq!(access, RouteAccess::RedirectToDefault);
    }

    #[test]
    fn test_guard_allows_matching_role() {
        let owner = session(Role::Owner);
        assert_eq!(guard(Some(&owner), Some(&[Role::Owner][..])), RouteAccess::Allow);
        assert_eq!(guard(Some(&owner), None), RouteAccess::Allow);
    }

    #[test]
    fn test_resolve_parameterized_route() {
        let route = resolve_route("/customer/restaurants/42/menu").expect("route exists");
        assert_eq!(route.title, "Menu");
        assert!(resolve_route("/customer/restaurants//menu").is_none());
        assert!(resolve_route("/nowhere").is_none());
    }

    #[test]
    fn test_resolve_ignores_trailing_slash_and_query() {
        assert_eq!(
            resolve_route("/customer/complaints?orderId=12").map(|r| r.pattern),
            Some("/customer/complaints")
        );
        assert_eq!(resolve_route("/owner/").map(|r| r.pattern), Some("/owner"));
    }

    #[test]
    fn test_route_path_drops_query_and_fragment() {
        assert_eq!(route_path("/login?next=%2Fowner"), "/login");
        assert_eq!(route_path("/care#top"), "/care");
        assert_eq!(route_path("/owner/orders"), "/owner/orders");
    }

    #[test]
    fn test_access_for_paths() {
        let care = session(Role::Care);
        assert_eq!(access_for(None, "/login"), RouteAccess::Allow);
        assert_eq!(access_for(None, "/"), RouteAccess::Forward("/login"));
        assert_eq!(access_for(None, "/care"), RouteAccess::RedirectToLogin);
        assert_eq!(access_for(Some(&care), "/care"), RouteAccess::Allow);
        assert_eq!(access_for(Some(&care), "/admin"), RouteAccess::RedirectToDefault);
        assert_eq!(
            access_for(Some(&care), "/delivery/status"),
            RouteAccess::Forward("/delivery")
        );
        assert_eq!(access_for(Some(&care), "/missing"), RouteAccess::NotFound);
    }

    #[test]
    fn test_every_home_route_admits_its_role() {
        for role in Role::all() {
            let s = session(*role);
            assert_eq!(access_for(Some(&s), role.home_route()), RouteAccess::Allow);
        }
    }
}
