//! Pill badge showing a report status glyph and label.

use leptos::prelude::*;

use crate::util::status::{status_color_classes, status_icon, status_label};

#[component]
pub fn StatusBadge(status: &'static str) -> impl IntoView {
    let class = format!("status-badge {}", status_color_classes(status));

    view! {
        <span class=class>
            {status_icon(status)}
            <span class="status-badge__label">{status_label(status)}</span>
        </span>
    }
}
