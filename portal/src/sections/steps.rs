use leptos::prelude::*;

use crate::content::{STEPS, STEPS_DESCRIPTION, STEPS_TITLE, Step};

/// Numbered row of all [`STEPS`].
#[component]
pub fn Steps() -> impl IntoView {
    view! {
        <section id="how-it-works" class="steps py-5">
            <div class="container">
                <div class="section-header text-center mb-4">
                    <h2 class="section-title">{STEPS_TITLE}</h2>
                    <p class="section-description text-muted">{STEPS_DESCRIPTION}</p>
                </div>
                <div class="row g-4">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| view! { <StepCard number={i + 1} step=step /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(number: usize, step: Step) -> impl IntoView {
    let icon_class = format!("bi bi-{} fs-3", step.icon);
    view! {
        <div class="col-md-4">
            <article class="card step-card h-100 text-center border-0">
                <div class="card-body">
                    <div class="step-number badge rounded-pill bg-primary mb-3">{number}</div>
                    <div class="step-icon mb-2">
                        <i class=icon_class aria-hidden="true"></i>
                    </div>
                    <h3 class="card-title h5">{step.title}</h3>
                    <p class="card-text">{step.description}</p>
                </div>
            </article>
        </div>
    }
}
