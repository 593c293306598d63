use super::*;
use crate::net::types::User;

fn unauthenticated() -> Session {
    Session::default()
}

fn authenticated(role: Option<&str>) -> Session {
    Session {
        token: Some("T".to_owned()),
        user: Some(User {
            id: "1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: role.map(str::to_owned),
        }),
        loading: false,
        error: None,
    }
}

fn login_with(redirect: &str) -> GuardDecision {
    GuardDecision::RedirectToLogin {
        redirect: redirect.to_owned(),
    }
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_route_allows_everyone() {
    for session in [
        unauthenticated(),
        authenticated(Some("user")),
        authenticated(Some("admin")),
    ] {
        assert_eq!(
            evaluate(RouteAccess::Public, &session, "/about"),
            GuardDecision::Allow
        );
    }
}

// =============================================================
// Auth routes
// =============================================================

#[test]
fn auth_route_redirects_unauthenticated_to_login_with_destination() {
    assert_eq!(
        evaluate(RouteAccess::RequiresAuth, &unauthenticated(), "/profile"),
        login_with("/profile")
    );
}

#[test]
fn auth_route_allows_any_authenticated_user() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAuth,
            &authenticated(Some("user")),
            "/profile"
        ),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAuth,
            &authenticated(Some("admin")),
            "/profile"
        ),
        GuardDecision::Allow
    );
}

#[test]
fn bare_token_counts_as_unauthenticated() {
    let session = Session {
        token: Some("T".to_owned()),
        ..Session::default()
    };
    assert_eq!(
        evaluate(RouteAccess::RequiresAuth, &session, "/profile"),
        login_with("/profile")
    );
}

// =============================================================
// Guest routes
// =============================================================

#[test]
fn guest_route_allows_unauthenticated_visitors() {
    assert_eq!(
        evaluate(RouteAccess::RequiresGuest, &unauthenticated(), "/login"),
        GuardDecision::Allow
    );
}

#[test]
fn guest_route_sends_authenticated_users_home() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresGuest,
            &authenticated(Some("user")),
            "/register"
        ),
        GuardDecision::RedirectToHome
    );
    assert_eq!(
        evaluate(
            RouteAccess::RequiresGuest,
            &authenticated(Some("admin")),
            "/register"
        ),
        GuardDecision::RedirectToHome
    );
}

// =============================================================
// Admin routes
// =============================================================

#[test]
fn admin_route_sends_unauthenticated_to_login_not_home() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAdmin,
            &unauthenticated(),
            "/admin/products"
        ),
        login_with("/admin/products")
    );
}

#[test]
fn admin_route_sends_non_admin_home_not_to_login() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAdmin,
            &authenticated(Some("user")),
            "/admin/dashboard"
        ),
        GuardDecision::RedirectToHome
    );
}

#[test]
fn admin_route_treats_a_missing_role_as_non_admin() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAdmin,
            &authenticated(None),
            "/admin/dashboard"
        ),
        GuardDecision::RedirectToHome
    );
}

#[test]
fn admin_route_allows_admins() {
    assert_eq!(
        evaluate(
            RouteAccess::RequiresAdmin,
            &authenticated(Some("admin")),
            "/admin/dashboard"
        ),
        GuardDecision::Allow
    );
}

// =============================================================
// Redirect construction
// =============================================================

#[test]
fn login_redirect_url_carries_the_destination() {
    assert_eq!(
        login_redirect_url("/admin/products"),
        "/login?redirect=/admin/products"
    );
}

#[test]
fn full_path_keeps_the_query_string() {
    assert_eq!(full_path("/admin/products", "page=2"), "/admin/products?page=2");
}

#[test]
fn full_path_without_a_query_is_just_the_pathname() {
    assert_eq!(full_path("/profile", ""), "/profile");
}
