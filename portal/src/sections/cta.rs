use leptos::prelude::*;

use super::ActionLink;
use crate::content::{CTA_ACTION, CTA_DESCRIPTION, CTA_TITLE};

/// Closing band with [`CTA_ACTION`].
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="get-started" class="cta py-5 bg-primary text-white">
            <div class="container text-center">
                <h2 class="cta-title">{CTA_TITLE}</h2>
                <p class="lead">{CTA_DESCRIPTION}</p>
                <ActionLink action=CTA_ACTION />
            </div>
        </section>
    }
}
