//! Report tracking page: search form, current status card, and timeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in only. While the session resolves a placeholder is shown; a
//! signed-out session redirects to sign-in with `/track` as the callback and
//! renders nothing.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::status_badge::StatusBadge;
use crate::components::status_timeline::StatusTimeline;
use crate::net::reports::{DEMO_REPORT_ID, DemoReports};
use crate::net::types::ReportStatus;
use crate::state::session::SessionState;
use crate::state::track::TrackState;
use crate::util::auth::{TRACK_PATH, install_unauth_redirect, should_redirect_unauth};

/// What the page renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackGate {
    Loading,
    Redirect,
    Content,
}

pub fn track_gate(session: &SessionState) -> TrackGate {
    if session.is_loading() {
        TrackGate::Loading
    } else if should_redirect_unauth(session) {
        TrackGate::Redirect
    } else {
        TrackGate::Content
    }
}

#[component]
pub fn TrackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate(), TRACK_PATH);

    let gate = Memo::new(move |_| track_gate(&session.get()));

    view! {
        {move || match gate.get() {
            TrackGate::Loading => view! {
                <div class="track-page track-page--centered">
                    <div class="panel">
                        <p class="muted">"Loading..."</p>
                    </div>
                </div>
            }
            .into_any(),
            TrackGate::Redirect => ().into_any(),
            TrackGate::Content => view! { <TrackContent/> }.into_any(),
        }}
    }
}

#[component]
fn TrackContent() -> impl IntoView {
    let lookup = DemoReports::today();
    let track = RwSignal::new(TrackState::new(lookup.demo_report()));
    let report = Memo::new(move |_| track.with(|t| t.report.clone()));
    let error = Memo::new(move |_| track.with(TrackState::error_message));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        track.update(|t| t.submit(&lookup));
        if let Some(message) = track.with_untracked(TrackState::error_message) {
            leptos::logging::log!("report search failed: {message}");
        }
    };

    view! {
        <div class="track-page">
            <div class="track-page__container">
                <header class="track-page__header">
                    <h1 class="track-page__title">"Track Your Report"</h1>
                    <p class="track-page__subtitle">"Enter your report ID to check its current status"</p>
                </header>

                <div class="panel track-page__search">
                    <form class="search-form" on:submit=on_search>
                        <div class="search-form__field">
                            <label for="search-id" class="search-form__label">"Report ID"</label>
                            <input
                                type="text"
                                id="search-id"
                                name="search-id"
                                class="search-form__input"
                                placeholder={format!("Enter Report ID (e.g., {DEMO_REPORT_ID})")}
                                prop:value=move || track.with(|t| t.search_id.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    track.update(|t| t.search_id = value);
                                }
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || track.with(|t| t.searching)
                        >
                            {move || track.with(TrackState::search_button_label)}
                        </button>
                    </form>
                </div>

                {move || error.get().map(|message| view! { <ErrorAlert message=message/> })}

                {move || view! { <ReportCard report=report.get()/> }}
            </div>
        </div>
    }
}

/// Inline red alert shown above the report card.
#[component]
fn ErrorAlert(message: String) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <svg class="alert__icon" viewBox="0 0 20 20" fill="currentColor">
                <path
                    fill-rule="evenodd"
                    clip-rule="evenodd"
                    d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z"
                />
            </svg>
            <p class="alert__message">{message}</p>
        </div>
    }
}

#[component]
fn ReportCard(report: ReportStatus) -> impl IntoView {
    let department = report.department_label().to_owned();
    let resolution = report.expected_resolution_label().to_owned();

    view! {
        <div class="panel report-card">
            <div class="report-card__header">
                <div>
                    <h3 class="report-card__title">"Report Status"</h3>
                    <p class="report-card__id">"Report ID: " {report.report_id}</p>
                </div>
                <StatusBadge status={report.status.as_str()}/>
            </div>

            <div class="report-card__body">
                <div class="report-card__facts">
                    <div>
                        <h4 class="report-card__label">"Assigned Department"</h4>
                        <p class="report-card__value">{department}</p>
                    </div>
                    <div>
                        <h4 class="report-card__label">"Expected Resolution"</h4>
                        <p class="report-card__value">{resolution}</p>
                    </div>
                </div>

                <div>
                    <h4 class="report-card__label">"Status Timeline"</h4>
                    <StatusTimeline entries=report.timeline/>
                </div>

                <div class="support-box">
                    <h3 class="support-box__title">"Need assistance?"</h3>
                    <p class="support-box__body">
                        "If you have any questions or concerns about your report, please contact our support team. "
                        "Our dedicated team is available 24/7 to assist you."
                    </p>
                    <a href="#" class="support-box__link">"Contact Support →"</a>
                </div>
            </div>
        </div>
    }
}
