//! Route table shared by the browser shell and the static renderer.

use serde::Serialize;

/// A top-level renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Marketing home page
    Home,
}

impl Page {
    /// Lowercase identifier, as printed by `portal-render --resolve`.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
        }
    }
}

/// Configured paths. `/` and `/home` are aliases for the same page.
pub const ROUTES: &[(&str, Page)] = &[("/", Page::Home), ("/home", Page::Home)];

/// Destinations the home page links to. They are served elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTarget {
    /// Account sign-up
    Register,
    /// Doctor directory
    Doctors,
}

impl NavTarget {
    /// Absolute path of the destination.
    pub fn href(self) -> &'static str {
        match self {
            NavTarget::Register => "/register",
            NavTarget::Doctors => "/doctors",
        }
    }
}

/// Look up the page for a request path.
///
/// Query strings and fragments are ignored, as is a trailing slash, so
/// `/home/?ref=mail` resolves like `/home`. Anything not in [`ROUTES`]
/// yields `None`.
pub fn resolve(path: &str) -> Option<Page> {
    canonical(path).map(|(_, page)| page)
}

/// The [`ROUTES`] entry `path` matches, after the same normalisation as
/// [`resolve`]. `/home/?ref=mail` yields `("/home", Page::Home)`.
pub fn canonical(path: &str) -> Option<(&'static str, Page)> {
    let path = normalize(path);
    ROUTES.iter().copied().find(|(route, _)| *route == path)
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_aliases_resolve_home() {
        assert_eq!(resolve("/"), Some(Page::Home));
        assert_eq!(resolve("/home"), Some(Page::Home));
    }

    #[test]
    fn ignores_trailing_slash_query_and_fragment() {
        assert_eq!(resolve(""), Some(Page::Home));
        assert_eq!(resolve("/home/"), Some(Page::Home));
        assert_eq!(resolve("/?utm_source=ad"), Some(Page::Home));
        assert_eq!(resolve("/home#steps"), Some(Page::Home));
    }

    #[test]
    fn external_and_unknown_paths_do_not_resolve() {
        assert_eq!(resolve(NavTarget::Register.href()), None);
        assert_eq!(resolve(NavTarget::Doctors.href()), None);
        assert_eq!(resolve("/homepage"), None);
        assert_eq!(resolve("/home/extra"), None);
    }

    #[test]
    fn canonical_returns_the_table_entry() {
        assert_eq!(canonical("/home/?ref=mail"), Some(("/home", Page::Home)));
        assert_eq!(canonical("#top"), Some(("/", Page::Home)));
        assert_eq!(canonical("/doctors"), None);
    }

    #[test]
    fn route_table_is_unique() {
        for (i, (a, _)) in ROUTES.iter().enumerate() {
            assert!(ROUTES[i + 1..].iter().all(|(b, _)| a != b), "duplicate route {a}");
        }
    }
}
