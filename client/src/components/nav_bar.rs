//! Top navigation bar with brand link and session-aware actions.
//!
//! Auth links carry `rel="external"` so the router leaves them to the
//! browser instead of resolving them against its own routes.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::session::{SessionState, SessionStatus};
use crate::util::auth::{HOME_PATH, SIGNIN_PATH, SIGNOUT_URL, SIGNUP_PATH, TRACK_PATH};

/// Which set of actions the nav bar (and hero) should offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Sign in / sign up.
    Guest,
    /// Welcome, track, sign out.
    Member { name: String },
    /// Nothing; the session is in an inconsistent in-between state.
    Hidden,
}

/// Guest wins whenever there is no session data, even while loading.
pub fn nav_mode(session: &SessionState) -> NavMode {
    if session.status == SessionStatus::Unauthenticated || session.data.is_none() {
        return NavMode::Guest;
    }
    if session.status == SessionStatus::Authenticated {
        return NavMode::Member { name: session.user_name().unwrap_or_default().to_owned() };
    }
    NavMode::Hidden
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href=HOME_PATH class="nav-bar__brand">
                    <svg class="nav-bar__logo" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"
                        />
                    </svg>
                    <span class="nav-bar__title">"GovReport"</span>
                </a>
                <div class="nav-bar__actions">
                    {move || match nav_mode(&session.get()) {
                        NavMode::Guest => view! {
                            <a href=SIGNIN_PATH class="nav-bar__link" rel="external">"Sign In"</a>
                            <a href=SIGNUP_PATH class="nav-bar__link nav-bar__link--primary" rel="external">
                                "Sign Up"
                            </a>
                        }
                        .into_any(),
                        NavMode::Member { name } => view! {
                            <span class="nav-bar__welcome">"Welcome, " {name}</span>
                            <a href=TRACK_PATH class="nav-bar__link">"Track Reports"</a>
                            <a href=SIGNOUT_URL class="nav-bar__link" rel="external">"Sign Out"</a>
                        }
                        .into_any(),
                        NavMode::Hidden => ().into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
