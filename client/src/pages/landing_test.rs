use super::*;
use crate::net::types::{Session, SessionUser};

fn signed_in() -> SessionState {
    SessionState::resolved(Some(Session {
        user: SessionUser { name: Some("Ada".to_owned()), email: None, image: None },
        expires: None,
    }))
}

#[test]
fn features_cover_submission_tracking_and_security() {
    let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
    assert_eq!(titles, ["Easy Submission", "Track Progress", "Secure & Confidential"]);
    assert!(FEATURES.iter().all(|f| !f.icon_paths.is_empty() && !f.body.is_empty()));
}

#[test]
fn hero_extra_offers_create_account_to_guests() {
    assert_eq!(hero_extra(&nav_mode(&SessionState::resolved(None))), Some(HeroExtra::CreateAccount));
    assert_eq!(hero_extra(&nav_mode(&SessionState::default())), Some(HeroExtra::CreateAccount));
}

#[test]
fn hero_extra_offers_track_report_to_members() {
    assert_eq!(hero_extra(&nav_mode(&signed_in())), Some(HeroExtra::TrackReport));
}

#[test]
fn hero_extra_hidden_mode_offers_nothing() {
    assert_eq!(hero_extra(&NavMode::Hidden), None);
}

#[test]
fn file_report_destination_depends_on_session() {
    assert_eq!(
        gated_destination(&SessionState::resolved(None), REPORT_PATH),
        "/auth/signin?callbackUrl=/report"
    );
    assert_eq!(gated_destination(&signed_in(), REPORT_PATH), "/report");
}

#[test]
fn track_report_destination_depends_on_session() {
    assert_eq!(
        gated_destination(&SessionState::resolved(None), TRACK_PATH),
        "/auth/signin?callbackUrl=/track"
    );
    assert_eq!(gated_destination(&signed_in(), TRACK_PATH), "/track");
}
