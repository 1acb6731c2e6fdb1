//! Public landing page: navigation, hero, feature cards, and call to action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open to everyone. The two primary actions ("file a report", "track
//! report") go straight to their destination when a session exists and to
//! sign-in with a callback otherwise.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feature_card::{Feature, FeatureCard};
use crate::components::nav_bar::{NavBar, NavMode, nav_mode};
use crate::state::session::SessionState;
use crate::util::auth::{REPORT_PATH, SIGNUP_PATH, TRACK_PATH, gated_destination, go_to};

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Easy Submission",
        body: "Simple and secure process to submit your reports with complete anonymity if desired.",
        icon_paths: &["M12 6v6m0 0v6m0-6h6m-6 0H6"],
    },
    Feature {
        title: "Track Progress",
        body: "Monitor the status of your report and receive updates throughout the process.",
        icon_paths: &[
            "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
            "M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
        ],
    },
    Feature {
        title: "Secure & Confidential",
        body: "Your information is protected with state-of-the-art security measures.",
        icon_paths: &[
            "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        ],
    },
];

/// Secondary hero actions offered next to "File a Report".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroExtra {
    TrackReport,
    CreateAccount,
}

pub fn hero_extra(mode: &NavMode) -> Option<HeroExtra> {
    match mode {
        NavMode::Guest => Some(HeroExtra::CreateAccount),
        NavMode::Member { .. } => Some(HeroExtra::TrackReport),
        NavMode::Hidden => None,
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Buttons only record the requested target; navigation happens here so
    // the router handle stays out of the view closures.
    let requested = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(target) = requested.get() {
            requested.set(None);
            go_to(&navigate, &gated_destination(&session.get_untracked(), target));
        }
    });

    let extra = Memo::new(move |_| hero_extra(&nav_mode(&session.get())));

    view! {
        <main class="landing-page">
            <NavBar/>

            <section class="hero">
                <div class="hero__inner">
                    <div class="hero__copy">
                        <h1 class="hero__title">
                            <span class="hero__title-line">"Report Issues"</span>
                            <span class="hero__title-line hero__title-line--accent">"Make a Difference"</span>
                        </h1>
                        <p class="hero__blurb">
                            "Help us improve government services by reporting issues, corruption, or misconduct. "
                            "Your voice matters in making our community better and more transparent."
                        </p>
                        <div class="hero__actions">
                            <button class="btn btn--primary btn--large" on:click=move |_| requested.set(Some(REPORT_PATH))>
                                <ActionIcon d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                                "File a Report"
                            </button>
                            {move || match extra.get() {
                                Some(HeroExtra::TrackReport) => view! {
                                    <button class="btn btn--soft btn--large" on:click=move |_| requested.set(Some(TRACK_PATH))>
                                        <ActionIcon d="M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-6 9l2 2 4-4"/>
                                        "Track Report"
                                    </button>
                                }
                                .into_any(),
                                Some(HeroExtra::CreateAccount) => view! {
                                    <a href=SIGNUP_PATH class="btn btn--outline btn--large" rel="external">
                                        <ActionIcon d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"/>
                                        "Create Account"
                                    </a>
                                }
                                .into_any(),
                                None => ().into_any(),
                            }}
                        </div>
                    </div>
                    <div class="hero__art">
                        <HeroIllustration/>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="features__intro">
                    <h2 class="features__eyebrow">"Features"</h2>
                    <p class="features__headline">"A better way to report issues"</p>
                    <p class="features__lede">
                        "Our platform provides a secure and efficient way to report and track issues"
                    </p>
                </div>
                <div class="features__grid">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Ready to make a difference?"</h2>
                <p class="cta__lede">"Join us in building a more transparent and accountable society."</p>
                <button class="btn btn--inverse btn--large" on:click=move |_| requested.set(Some(REPORT_PATH))>
                    "Start Reporting"
                    <ActionIcon d="M17 8l4 4m0 0l-4 4m4-4H3"/>
                </button>
            </section>
        </main>
    }
}

/// Small stroke icon used inside action buttons.
#[component]
fn ActionIcon(d: &'static str) -> impl IntoView {
    view! {
        <svg class="btn__icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d/>
        </svg>
    }
}

/// Decorative document / magnifier / shield artwork beside the hero copy.
#[component]
fn HeroIllustration() -> impl IntoView {
    view! {
        <svg class="hero__illustration" viewBox="0 0 800 600" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="400" cy="300" r="250" fill="currentColor" fill-opacity="0.1"/>
            <circle cx="400" cy="300" r="200" fill="currentColor" fill-opacity="0.05"/>

            <path d="M300 200h200v300H300z" fill="white" stroke="currentColor" stroke-width="8"/>
            <path d="M330 250h140M330 300h140M330 350h80" stroke="currentColor" stroke-width="8" stroke-linecap="round"/>
            <circle cx="500" cy="400" r="80" stroke="currentColor" stroke-width="8" fill="white"/>
            <line x1="560" y1="460" x2="620" y2="520" stroke="currentColor" stroke-width="12" stroke-linecap="round"/>

            <circle cx="250" cy="150" r="50" fill="currentColor"/>
            <path d="M230 150l15 15 30-30" stroke="white" stroke-width="8" stroke-linecap="round" stroke-linejoin="round"/>

            <path
                d="M550 150c0 55-50 100-50 100s-50-45-50-100c0-27.614 22.386-50 50-50s50 22.386 50 50z"
                fill="currentColor"
                fill-opacity="0.2"
                stroke="currentColor"
                stroke-width="8"
            />
            <path d="M520 140l-15 15-15-15" stroke="currentColor" stroke-width="8" stroke-linecap="round" stroke-linejoin="round"/>

            <circle cx="200" cy="400" r="10" fill="currentColor"/>
            <circle cx="600" cy="200" r="10" fill="currentColor"/>
            <path d="M200 400l400-200" stroke="currentColor" stroke-width="4" stroke-dasharray="15 15"/>

            <circle cx="180" cy="300" r="15" fill="currentColor"/>
            <circle cx="280" cy="300" r="15" fill="currentColor" fill-opacity="0.6"/>
            <circle cx="380" cy="300" r="15" fill="currentColor" fill-opacity="0.3"/>
            <path d="M195 300h70M295 300h70" stroke="currentColor" stroke-width="4" stroke-dasharray="8 8"/>
        </svg>
    }
}
