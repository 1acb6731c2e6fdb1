use super::*;
use crate::net::types::{Session, SessionUser};
use crate::util::auth::{should_redirect_unauth, signin_url};

fn signed_in() -> SessionState {
    SessionState::resolved(Some(Session { user: SessionUser::default(), expires: None }))
}

#[test]
fn track_gate_shows_placeholder_while_loading() {
    assert_eq!(track_gate(&SessionState::default()), TrackGate::Loading);
}

#[test]
fn track_gate_redirects_when_signed_out() {
    let state = SessionState::resolved(None);
    assert_eq!(track_gate(&state), TrackGate::Redirect);
    assert!(should_redirect_unauth(&state));
    assert_eq!(signin_url(TRACK_PATH), "/auth/signin?callbackUrl=/track");
}

#[test]
fn track_gate_renders_content_when_signed_in() {
    let state = signed_in();
    assert_eq!(track_gate(&state), TrackGate::Content);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn track_gate_stays_resolved_after_late_resolution() {
    let mut state = SessionState::default();
    state.resolve(None);
    state.resolve(signed_in().data);
    assert_eq!(track_gate(&state), TrackGate::Redirect);
}
