use leptos::prelude::*;

use super::ActionLink;
use crate::content::{BRAND, HERO_ACTIONS, HERO_LEAD, HERO_TITLE, HERO_TITLE_ACCENT};

/// Headline, lead copy and the two hero actions.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero py-5">
            <div class="container">
                <div class="row justify-content-center">
                    <div class="col-md-8 text-center">
                        <p class="hero-eyebrow text-uppercase text-muted">{BRAND}</p>
                        <h1 class="display-4">
                            {HERO_TITLE}
                            " "
                            <span class="text-primary">{HERO_TITLE_ACCENT}</span>
                        </h1>
                        <p class="lead">{HERO_LEAD}</p>
                        <div class="hero-actions d-flex gap-3 justify-content-center mt-3">
                            {HERO_ACTIONS
                                .into_iter()
                                .map(|action| view! { <ActionLink action=action /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
