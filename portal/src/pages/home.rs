// Home page - hero, features, steps, call-to-action
use crate::sections::{CallToAction, Features, Hero, Steps};
use leptos::prelude::*;

/// Hero, features, steps and call-to-action, always in that order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <Steps />
        <CallToAction />
    }
}
