//! Vertical stepper listing a report's status history.
//!
//! DESIGN
//! ======
//! Entries render in the order given (oldest first). A connector line runs
//! from each entry down to the next, so N entries draw N-1 connectors.

#[cfg(test)]
#[path = "status_timeline_test.rs"]
mod status_timeline_test;

use leptos::prelude::*;

use crate::net::types::TimelineEntry;
use crate::util::status::{status_color_classes, status_icon};

/// Whether the entry at `index` gets a connector to the one below it.
pub fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[component]
pub fn StatusTimeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    let len = entries.len();

    view! {
        <div class="timeline">
            <ul class="timeline__list">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(idx, entry)| {
                        let bubble_class = format!(
                            "timeline__bubble {}",
                            status_color_classes(&entry.status),
                        );
                        let icon = status_icon(&entry.status);
                        view! {
                            <li class="timeline__item">
                                {has_connector(idx, len)
                                    .then(|| view! { <span class="timeline__connector" aria-hidden="true"></span> })}
                                <div class="timeline__row">
                                    <span class=bubble_class>{icon}</span>
                                    <div class="timeline__body">
                                        <p class="timeline__description">{entry.description}</p>
                                        <p class="timeline__date">{entry.date}</p>
                                    </div>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
