//! Shared DTOs for the session payload and the report-status view model.
//!
//! DESIGN
//! ======
//! Field names follow the JSON shapes of the external session provider and
//! of the report view model (`camelCase` on the wire) so a real report
//! backend can be slotted in without reshaping the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// SESSION
// =============================================================================

/// Identity fields exposed by the external session provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// A signed-in session as reported by the external provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    /// ISO-8601 expiry timestamp, passed through untouched.
    pub expires: Option<String>,
}

/// Raw response body of the session endpoint. Signed-out sessions come back
/// as an empty object.
#[derive(Debug, Deserialize)]
struct SessionPayload {
    user: Option<SessionUser>,
    expires: Option<String>,
}

/// Parse the session endpoint body into a signed-in session, if any.
///
/// Empty objects, `null`, and malformed bodies all mean "no session".
pub fn parse_session(raw: &str) -> Option<Session> {
    let payload: Option<SessionPayload> = serde_json::from_str(raw).ok()?;
    let payload = payload?;
    let user = payload.user?;
    Some(Session { user, expires: payload.expires })
}

// =============================================================================
// REPORT STATUS
// =============================================================================

/// Closed set of report lifecycle stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStage {
    Submitted,
    UnderReview,
    InProgress,
    Resolved,
}

impl ReportStage {
    /// Wire name of the stage (`"under_review"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

/// One historical status-change event in a report's timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Display-formatted date.
    pub date: String,
    /// Free-form status name; unknown values render with the default style.
    pub status: String,
    pub description: String,
}

/// The report currently shown on the tracking page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatus {
    pub report_id: String,
    pub status: ReportStage,
    pub last_updated: String,
    pub details: String,
    /// Chronological order; first entry is the oldest.
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_resolution_date: Option<String>,
}

impl ReportStatus {
    pub fn department_label(&self) -> &str {
        self.assigned_department.as_deref().unwrap_or("Pending Assignment")
    }

    pub fn expected_resolution_label(&self) -> &str {
        self.expected_resolution_date.as_deref().unwrap_or("To be determined")
    }
}
