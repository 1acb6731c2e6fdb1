//! Report status presentation: badge colors, glyphs, and labels.
//!
//! These take the raw status string rather than `ReportStage` because
//! timeline entries carry free-form statuses. Anything unrecognized renders
//! with the neutral gray style and a question mark.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Background + text color classes for a status badge.
pub fn status_color_classes(status: &str) -> &'static str {
    match status {
        "submitted" => "bg-yellow-100 text-yellow-800",
        "under_review" => "bg-blue-100 text-blue-800",
        "in_progress" => "bg-purple-100 text-purple-800",
        "resolved" => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Glyph shown alongside a status.
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "submitted" => "📝",
        "under_review" => "👀",
        "in_progress" => "🔍",
        "resolved" => "✅",
        _ => "❓",
    }
}

/// Badge text: first underscore becomes a space, then upper-cased.
pub fn status_label(status: &str) -> String {
    status.replacen('_', " ", 1).to_uppercase()
}
