//! Reusable card component for the dashboard feature grid.

use leptos::prelude::*;

/// A titled card describing one dashboard feature.
#[component]
pub fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}
