//! # medical-portal
//!
//! Leptos components for the public front of a medical second-opinion
//! service: an app shell that routes `/` and `/home` to a static marketing
//! home page.
//!
//! The same components run in two places:
//!
//! - in the browser, mounted by the `web` crate through [`app::AppShell`]
//!   (`csr` feature)
//! - on the host, rendered to static HTML by [`render_route`] and
//!   [`render_document`] (`ssr` feature, the default)
//!
//! ## Quick Start
//!
//! ```rust
//! use medical_portal::{render_document, DocumentOptions};
//!
//! let html = render_document("/", &DocumentOptions::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("href=\"/register\""));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - compile-time copy: feature cards, steps, affordances
//! - [`routes`] - route table and outbound navigation targets
//! - [`sections`] / [`pages`] - Leptos components
//! - [`app`] - router shell for the browser
//!
//! Rendering never touches the network or the filesystem.

#![warn(missing_docs)]

pub mod app;
pub mod content;
#[cfg(feature = "ssr")]
mod document;
mod error;
pub mod pages;
pub mod routes;
pub mod sections;

pub use error::RenderError;

#[cfg(feature = "ssr")]
use document::{PortalDocument, page_view};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Default stylesheet: Bootstrap 5, which the class names target.
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Bootstrap Icons, for the `bi bi-*` feature and step icons.
pub const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

/// Head settings for [`render_document`].
///
/// ```rust
/// use medical_portal::DocumentOptions;
///
/// // Self-hosted styles instead of the CDN
/// let options = DocumentOptions {
///     stylesheets: vec!["/assets/site.css".into()],
///     ..Default::default()
/// };
/// assert_eq!(options.lang, "en");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Contents of `<title>`
    pub title: String,
    /// `lang` attribute on `<html>`
    pub lang: String,
    /// Stylesheet URLs, linked in order
    pub stylesheets: Vec<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: format!("{} - Medical Second Opinions", content::BRAND),
            lang: "en".into(),
            stylesheets: vec![BOOTSTRAP_CSS.into(), BOOTSTRAP_ICONS_CSS.into()],
        }
    }
}

/// Render the page body for `path`.
///
/// Aliases render identically, so `render_route("/")` equals
/// `render_route("/home")`.
///
/// # Errors
///
/// [`RenderError::UnknownRoute`] when `path` is not in
/// [`routes::ROUTES`].
#[cfg(feature = "ssr")]
pub fn render_route(path: &str) -> Result<String, RenderError> {
    let page = routes::resolve(path).ok_or_else(|| RenderError::UnknownRoute(path.into()))?;
    Ok(page_view(page).to_html())
}

/// Render a complete HTML document for `path`, including `<!DOCTYPE html>`.
///
/// # Errors
///
/// [`RenderError::UnknownRoute`] when `path` is not in
/// [`routes::ROUTES`].
#[cfg(feature = "ssr")]
pub fn render_document(path: &str, options: &DocumentOptions) -> Result<String, RenderError> {
    let page = routes::resolve(path).ok_or_else(|| RenderError::UnknownRoute(path.into()))?;
    let doc = view! { <PortalDocument page=page options=options.clone() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", doc.to_html()))
}
