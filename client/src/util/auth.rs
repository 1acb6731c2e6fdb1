//! Shared auth and navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in, sign-up, sign-out, and report filing live outside this app, so
//! only the landing page and the tracking page are router destinations.
//! Everything else is reached with a full-page navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

pub const HOME_PATH: &str = "/";
pub const TRACK_PATH: &str = "/track";
pub const REPORT_PATH: &str = "/report";
pub const SIGNIN_PATH: &str = "/auth/signin";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const SIGNOUT_URL: &str = "/api/auth/signout?callbackUrl=/";

/// Sign-in URL that returns to `callback` afterwards. The callback is
/// appended as-is.
pub fn signin_url(callback: &str) -> String {
    format!("{SIGNIN_PATH}?callbackUrl={callback}")
}

/// Where a gated action should go: `target` when a session is present,
/// otherwise sign-in with `target` as the callback.
pub fn gated_destination(session: &SessionState, target: &str) -> String {
    if session.data.is_some() { target.to_owned() } else { signin_url(target) }
}

/// True once the session has resolved to signed out.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    session.status == SessionStatus::Unauthenticated
}

/// True when `path` is rendered by this app's router rather than an
/// external route.
pub fn is_app_route(path: &str) -> bool {
    let route = path.split(['?', '#']).next().unwrap_or_default();
    matches!(route, HOME_PATH | TRACK_PATH)
}

/// Navigate to `path`, through the router for app routes and with a
/// full-page load for external ones.
pub fn go_to<F>(navigate: &F, path: &str)
where
    F: Fn(&str, NavigateOptions),
{
    if is_app_route(path) {
        navigate(path, NavigateOptions::default());
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Redirect to sign-in (returning to `callback`) whenever the session
/// resolves to signed out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F, callback: &'static str)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            go_to(&navigate, &signin_url(callback));
        }
    });
}
