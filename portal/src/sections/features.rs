use leptos::prelude::*;

use crate::content::{FEATURES, FEATURES_DESCRIPTION, FEATURES_TITLE, Feature};

/// Grid of all [`FEATURES`].
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features py-5 bg-light">
            <div class="container">
                <div class="section-header text-center mb-4">
                    <h2 class="section-title">{FEATURES_TITLE}</h2>
                    <p class="section-description text-muted">{FEATURES_DESCRIPTION}</p>
                </div>
                <div class="row g-4">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let icon_class = format!("bi bi-{} fs-2 text-primary", feature.icon);
    view! {
        <div class="col-md-6 col-lg-3">
            <article class="card feature-card h-100 text-center">
                <div class="card-body">
                    <div class="feature-icon mb-3">
                        <i class=icon_class aria-hidden="true"></i>
                    </div>
                    <h3 class="card-title h5">{feature.title}</h3>
                    <p class="card-text">{feature.description}</p>
                </div>
            </article>
        </div>
    }
}
