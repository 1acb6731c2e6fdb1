//! Marketing feature card for the landing page.

use leptos::prelude::*;

/// Static content for one feature card. `icon_paths` are SVG path `d`
/// attributes drawn on a 24x24 stroke icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
    pub icon_paths: &'static [&'static str],
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                    {feature
                        .icon_paths
                        .iter()
                        .map(|d| {
                            view! {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d}/>
                            }
                        })
                        .collect::<Vec<_>>()}
                </svg>
            </div>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__body">{feature.body}</p>
        </div>
    }
}
