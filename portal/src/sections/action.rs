use leptos::prelude::*;

use crate::content::Affordance;

/// Anchor for an [`Affordance`]. The targets live outside this app, so
/// `rel="external"` keeps the router from handling the click and the
/// browser does a full navigation.
#[component]
pub fn ActionLink(action: Affordance) -> impl IntoView {
    view! {
        <a href=action.target.href() rel="external" class=action.variant.class()>
            {action.label}
        </a>
    }
}
