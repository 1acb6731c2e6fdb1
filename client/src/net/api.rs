//! HTTP helpers for the external auth session provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session is only
//! resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or failing
//! auth provider degrades to "signed out" without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;

/// Session endpoint served by the external auth provider.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

#[cfg(any(test, feature = "hydrate"))]
fn session_request_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the current session from [`SESSION_ENDPOINT`].
/// Returns `None` if signed out, on any failure, or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SESSION_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("session request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            leptos::logging::warn!("{}", session_request_failed_message(resp.status()));
            return None;
        }
        let body = resp.text().await.ok()?;
        super::types::parse_session(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
