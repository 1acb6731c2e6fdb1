//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and report presentation while reading the
//! shared session from Leptos context where they need identity.

pub mod feature_card;
pub mod nav_bar;
pub mod status_badge;
pub mod status_timeline;
