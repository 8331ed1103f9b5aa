//! Full HTML document used for static export.

use leptos::prelude::*;

use crate::DocumentOptions;
use crate::app::SHELL_CLASS;
use crate::pages::HomePage;
use crate::routes::Page;

/// Body content for a resolved page, without the shell wrapper.
pub fn page_view(page: Page) -> impl IntoView {
    match page {
        Page::Home => view! { <HomePage /> },
    }
}

/// The complete HTML page for one route.
#[component]
pub fn PortalDocument(page: Page, options: DocumentOptions) -> impl IntoView {
    let DocumentOptions {
        title,
        lang,
        stylesheets,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {stylesheets
                    .into_iter()
                    .map(|href| view! { <link rel="stylesheet" href=href /> })
                    .collect_view()}
            </head>
            <body>
                <div class=SHELL_CLASS>{page_view(page)}</div>
            </body>
        </html>
    }
}
