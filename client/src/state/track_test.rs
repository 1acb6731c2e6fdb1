use super::*;
use crate::net::reports::{DEMO_REPORT_ID, DemoReports};
use crate::net::types::{ReportStage, TimelineEntry};
use time::{Date, Month};

fn lookup() -> DemoReports {
    DemoReports::new(Date::from_calendar_date(2024, Month::June, 10).unwrap())
}

/// A record that differs from the demo record so replacement is observable.
fn other_report() -> ReportStatus {
    ReportStatus {
        report_id: "REPORT-2023-777".to_owned(),
        status: ReportStage::Resolved,
        last_updated: "1/1/2024".to_owned(),
        details: "Closed.".to_owned(),
        timeline: vec![TimelineEntry {
            date: "12/30/2023".to_owned(),
            status: "resolved".to_owned(),
            description: "Done".to_owned(),
        }],
        assigned_department: None,
        expected_resolution_date: None,
    }
}

/// Lookup that always fails as unavailable.
struct DownLookup;

impl ReportLookup for DownLookup {
    fn find(&self, _report_id: &str) -> Result<ReportStatus, TrackError> {
        Err(TrackError::Unavailable)
    }
}

#[test]
fn new_state_shows_initial_report_without_error() {
    let state = TrackState::new(lookup().demo_report());
    assert_eq!(state.report.report_id, DEMO_REPORT_ID);
    assert_eq!(state.search_id, "");
    assert_eq!(state.error, None);
    assert!(!state.searching);
    assert_eq!(state.search_button_label(), "Search");
}

#[test]
fn search_miss_keeps_report_and_sets_not_found() {
    for miss in ["", "REPORT-2024-002", "report-2024-001", "anything"] {
        let mut state = TrackState::new(other_report());
        state.search(miss, &lookup());
        assert_eq!(state.report, other_report(), "report changed for {miss:?}");
        assert_eq!(state.error, Some(TrackError::NotFound));
        assert_eq!(
            state.error_message().as_deref(),
            Some("Report not found. Please check the ID and try again.")
        );
    }
}

#[test]
fn search_hit_replaces_report_and_clears_error() {
    let mut state = TrackState::new(other_report());
    state.search("nope", &lookup());
    assert!(state.error.is_some());

    state.search(DEMO_REPORT_ID, &lookup());
    assert_eq!(state.error, None);
    assert_eq!(state.report, lookup().demo_report());
    assert_eq!(state.report.status, ReportStage::UnderReview);
}

#[test]
fn search_unavailable_keeps_report_and_sets_generic_message() {
    let mut state = TrackState::new(other_report());
    state.search(DEMO_REPORT_ID, &DownLookup);
    assert_eq!(state.report, other_report());
    assert_eq!(
        state.error_message().as_deref(),
        Some("Failed to fetch report status. Please try again.")
    );
}

#[test]
fn search_always_resets_searching_flag() {
    let mut state = TrackState::new(other_report());
    state.searching = true;
    state.search("nope", &lookup());
    assert!(!state.searching);
    state.searching = true;
    state.search(DEMO_REPORT_ID, &lookup());
    assert!(!state.searching);
}

#[test]
fn submit_uses_current_input() {
    let mut state = TrackState::new(other_report());
    state.search_id = DEMO_REPORT_ID.to_owned();
    state.submit(&lookup());
    assert_eq!(state.report.report_id, DEMO_REPORT_ID);
    assert_eq!(state.search_id, DEMO_REPORT_ID);
}

#[test]
fn search_button_label_reflects_searching() {
    let mut state = TrackState::new(other_report());
    state.searching = true;
    assert_eq!(state.search_button_label(), "Searching...");
}
