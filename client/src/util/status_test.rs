use super::*;
use crate::net::types::ReportStage;

#[test]
fn color_classes_for_known_statuses() {
    assert_eq!(status_color_classes("submitted"), "bg-yellow-100 text-yellow-800");
    assert_eq!(status_color_classes("under_review"), "bg-blue-100 text-blue-800");
    assert_eq!(status_color_classes("in_progress"), "bg-purple-100 text-purple-800");
    assert_eq!(status_color_classes("resolved"), "bg-green-100 text-green-800");
}

#[test]
fn icons_for_known_statuses() {
    assert_eq!(status_icon("submitted"), "📝");
    assert_eq!(status_icon("under_review"), "👀");
    assert_eq!(status_icon("in_progress"), "🔍");
    assert_eq!(status_icon("resolved"), "✅");
}

#[test]
fn unknown_statuses_fall_back_to_gray_question_mark() {
    for status in ["", "closed", "Submitted", "under review", "RESOLVED", " resolved"] {
        assert_eq!(status_color_classes(status), "bg-gray-100 text-gray-800", "color for {status:?}");
        assert_eq!(status_icon(status), "❓", "icon for {status:?}");
    }
}

#[test]
fn every_report_stage_has_a_non_default_style() {
    for stage in [ReportStage::Submitted, ReportStage::UnderReview, ReportStage::InProgress, ReportStage::Resolved] {
        assert_ne!(status_color_classes(stage.as_str()), "bg-gray-100 text-gray-800");
        assert_ne!(status_icon(stage.as_str()), "❓");
    }
}

#[test]
fn status_label_replaces_first_underscore_and_uppercases() {
    assert_eq!(status_label("under_review"), "UNDER REVIEW");
    assert_eq!(status_label("in_progress"), "IN PROGRESS");
    assert_eq!(status_label("submitted"), "SUBMITTED");
    assert_eq!(status_label("a_b_c"), "A B_C");
}
