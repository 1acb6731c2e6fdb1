//! Report lookup used by the tracking page.
//!
//! DESIGN
//! ======
//! `ReportLookup` is the seam a real report backend would implement. The only
//! implementation today, `DemoReports`, recognizes a single demonstration ID
//! and builds its record relative to a fixed "today" so tests stay
//! deterministic.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use time::error::IndeterminateOffset;
use time::{Date, Duration, OffsetDateTime};

use super::types::{ReportStage, ReportStatus, TimelineEntry};

/// The one report ID the demonstration lookup recognizes.
pub const DEMO_REPORT_ID: &str = "REPORT-2024-001";

/// Failure to produce a report for a search.
///
/// `Display` output is the user-facing alert text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("Report not found. Please check the ID and try again.")]
    NotFound,
    /// Catch-all for any failure other than a clean miss.
    #[error("Failed to fetch report status. Please try again.")]
    Unavailable,
}

/// Source of report records keyed by report ID.
pub trait ReportLookup {
    /// Look up a report by its exact ID.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] when no report has this ID, or
    /// [`TrackError::Unavailable`] when the source could not answer.
    fn find(&self, report_id: &str) -> Result<ReportStatus, TrackError>;
}

/// In-memory lookup serving the demonstration record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoReports {
    today: Date,
}

impl DemoReports {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    /// Lookup anchored on the user's local calendar date. Falls back to UTC
    /// when the local offset cannot be determined.
    pub fn today() -> Self {
        Self::new(calendar_today(OffsetDateTime::now_local(), OffsetDateTime::now_utc()))
    }

    /// The demonstration record shown before any search.
    pub fn demo_report(&self) -> ReportStatus {
        let today = self.today;
        ReportStatus {
            report_id: DEMO_REPORT_ID.to_owned(),
            status: ReportStage::UnderReview,
            last_updated: format_display_date(today),
            details: "Your report is currently being reviewed by our team.".to_owned(),
            timeline: vec![
                TimelineEntry {
                    date: format_display_date(shift_days(today, -2)),
                    status: ReportStage::Submitted.as_str().to_owned(),
                    description: "Report submitted successfully".to_owned(),
                },
                TimelineEntry {
                    date: format_display_date(shift_days(today, -1)),
                    status: ReportStage::UnderReview.as_str().to_owned(),
                    description: "Report assigned to review team".to_owned(),
                },
            ],
            assigned_department: Some("Anti-Corruption Bureau".to_owned()),
            expected_resolution_date: Some(format_display_date(shift_days(today, 7))),
        }
    }
}

impl ReportLookup for DemoReports {
    fn find(&self, report_id: &str) -> Result<ReportStatus, TrackError> {
        if report_id == DEMO_REPORT_ID {
            Ok(self.demo_report())
        } else {
            Err(TrackError::NotFound)
        }
    }
}

/// US-style short date, `M/D/YYYY`, without zero padding.
pub fn format_display_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

fn calendar_today(local: Result<OffsetDateTime, IndeterminateOffset>, utc: OffsetDateTime) -> Date {
    local.unwrap_or(utc).date()
}

// Saturates at the calendar bounds instead of panicking.
fn shift_days(date: Date, days: i64) -> Date {
    date.checked_add(Duration::days(days)).unwrap_or(date)
}
