//! Tracking-page view state: search input, displayed report, and alert.
//!
//! DESIGN
//! ======
//! Exactly one report is displayed at a time. A successful search replaces
//! it wholesale; a failed search keeps it and sets the alert instead.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::net::reports::{ReportLookup, TrackError};
use crate::net::types::ReportStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackState {
    /// Current contents of the Report ID input.
    pub search_id: String,
    /// Report currently on screen.
    pub report: ReportStatus,
    /// Outcome of the last failed search, cleared when a new one starts.
    pub error: Option<TrackError>,
    /// Set while a search is running.
    pub searching: bool,
}

impl TrackState {
    pub fn new(initial: ReportStatus) -> Self {
        Self { search_id: String::new(), report: initial, error: None, searching: false }
    }

    /// Search for `id`, replacing the displayed report on a hit and keeping
    /// it (with an alert) on a miss. `searching` is always reset on return.
    pub fn search(&mut self, id: &str, lookup: &dyn ReportLookup) {
        self.error = None;
        self.searching = true;
        match lookup.find(id) {
            Ok(report) => self.report = report,
            Err(e) => self.error = Some(e),
        }
        self.searching = false;
    }

    /// Search for whatever is currently typed in the input.
    pub fn submit(&mut self, lookup: &dyn ReportLookup) {
        let id = self.search_id.clone();
        self.search(&id, lookup);
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn search_button_label(&self) -> &'static str {
        if self.searching { "Searching..." } else { "Search" }
    }
}
