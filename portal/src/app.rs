//! Browser app shell: router outlet inside a full-width container.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::pages::HomePage;

/// CSS classes of the wrapper around every page. Shared with
/// [`crate::render_document`] so static output matches the live shell.
pub const SHELL_CLASS: &str = "container-fluid px-0";

/// Root component. The `<Route>` list mirrors [`crate::routes::ROUTES`].
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class=SHELL_CLASS>
            <Router>
                <Routes fallback=|| view! { <Unmatched /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/home") view=HomePage />
                </Routes>
            </Router>
        </div>
    }
}

/// No not-found page exists; an unmatched path renders nothing.
#[component]
fn Unmatched() -> impl IntoView {
    let location = use_location();
    warn!("no route for {}", location.pathname.get_untracked());
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::routes::{NavTarget, ROUTES};
    use leptos::tachys::view::RenderHtml;
    use leptos_router::location::RequestUrl;
    use pretty_assertions::assert_eq;

    /// Server-render the full shell, router included, for a request path.
    fn render_shell(path: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <AppShell /> }.to_html()
        })
    }

    #[test]
    fn every_configured_route_renders_home() {
        for (path, _) in ROUTES {
            let html = render_shell(path);
            assert!(html.contains("id=\"hero\""), "{path} did not render home");
            assert!(html.contains(&format!("class=\"{SHELL_CLASS}\"")));
        }
    }

    #[test]
    fn aliases_render_identically_through_router() {
        assert_eq!(render_shell("/"), render_shell("/home"));
    }

    #[test]
    fn unmatched_path_renders_empty_shell() {
        for path in [NavTarget::Doctors.href(), NavTarget::Register.href(), "/missing"] {
            let html = render_shell(path);
            assert!(html.contains(SHELL_CLASS));
            assert!(!html.contains("id=\"hero\""), "{path} should render nothing");
            assert!(!html.contains("feature-card"));
        }
    }
}
