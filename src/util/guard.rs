//! Navigation guard deciding whether a route transition may proceed.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function of the target's access requirement and the
//! current session, so the decision table is unit-testable without a router.
//! `install` wires it to the reactive location and session inside a page or
//! layout component. Rules apply in order and the first match is the only
//! decision taken; an admin route never falls through to a second redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{Session, SessionStore};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Access requirement carried by a route. Each route declares at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Only authenticated users may enter.
    RequiresAuth,
    /// Only signed-out visitors may enter (login, register).
    RequiresGuest,
    /// Only authenticated users with the `admin` role may enter.
    RequiresAdmin,
}

/// Outcome of evaluating one route transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send to the login page, remembering where the user was headed.
    RedirectToLogin { redirect: String },
    RedirectToHome,
}

/// Decide one route transition:
///
/// 1. admin route, unauthenticated — login, keeping the destination;
/// 2. admin route, non-admin — home;
/// 3. auth route, unauthenticated — login, keeping the destination;
/// 4. guest route, authenticated — home;
/// 5. anything else — allow.
#[must_use]
pub fn evaluate(access: RouteAccess, session: &Session, target_path: &str) -> GuardDecision {
    let authenticated = session.is_authenticated();
    match access {
        RouteAccess::RequiresAdmin if !authenticated => redirect_to_login(target_path),
        RouteAccess::RequiresAdmin if !session.is_admin() => GuardDecision::RedirectToHome,
        RouteAccess::RequiresAuth if !authenticated => redirect_to_login(target_path),
        RouteAccess::RequiresGuest if authenticated => GuardDecision::RedirectToHome,
        _ => GuardDecision::Allow,
    }
}

fn redirect_to_login(target_path: &str) -> GuardDecision {
    GuardDecision::RedirectToLogin {
        redirect: target_path.to_owned(),
    }
}

/// Login URL carrying the intended destination for the post-login redirect.
/// The destination rides verbatim as the final parameter, its own query
/// string included; the consumer reads everything after the marker.
#[must_use]
pub fn login_redirect_url(target_path: &str) -> String {
    format!("{LOGIN_PATH}?redirect={target_path}")
}

/// Join pathname and query back into the full path the user was headed to.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Install the guard on the current page or layout section. Re-evaluates
/// whenever the session or the location changes and applies the decision
/// through the router, so a logout on a protected page redirects
/// immediately.
pub fn install(access: RouteAccess) {
    let store = expect_context::<SessionStore>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = use_navigate();
    Effect::new(move || {
        let session = store.state().get();
        let target = full_path(&pathname.get(), &search.get());
        match evaluate(access, &session, &target) {
            GuardDecision::Allow => {}
            GuardDecision::RedirectToLogin { redirect } => {
                log::debug!("guard: {target} needs sign-in");
                navigate(&login_redirect_url(&redirect), NavigateOptions::default());
            }
            GuardDecision::RedirectToHome => {
                log::debug!("guard: {target} is off limits, going home");
                navigate(HOME_PATH, NavigateOptions::default());
            }
        }
    });
}
