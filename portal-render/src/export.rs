//! Writes rendered routes and `manifest.json` to an output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use medical_portal::content::{Affordance, CTA_ACTION, FEATURES, Feature, HERO_ACTIONS, STEPS, Step};
use medical_portal::routes::{self, Page};
use medical_portal::{DocumentOptions, RenderError, render_document};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub routes: Vec<ExportedRoute>,
    pub features: &'static [Feature],
    pub steps: &'static [Step],
    /// Hero actions followed by the call-to-action
    pub actions: Vec<Affordance>,
}

#[derive(Debug, Serialize)]
pub struct ExportedRoute {
    pub path: String,
    /// Relative to the output directory, `/` separated
    pub file: String,
    pub page: Page,
}

/// `/` -> `index.html`, `/home` -> `home/index.html`.
pub fn file_for(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".into()
    } else {
        format!("{trimmed}/index.html")
    }
}

/// Render all `paths` before writing anything, so an unknown route leaves
/// `out_dir` untouched. Paths are reduced to their route table entry, so
/// `/home/?ref=mail` and `/home` both export once, as `/home`.
pub fn export(paths: &[String], options: &DocumentOptions, out_dir: &Path) -> Result<Manifest> {
    let mut rendered: Vec<(&'static str, Page, String)> = Vec::with_capacity(paths.len());
    for path in paths {
        let (route, page) = routes::canonical(path)
            .ok_or_else(|| RenderError::UnknownRoute(path.clone()))?;
        if rendered.iter().any(|(seen, _, _)| *seen == route) {
            debug!(path, route, "already rendered");
            continue;
        }
        let html = render_document(route, options)?;
        debug!(path, route, bytes = html.len(), "rendered");
        rendered.push((route, page, html));
    }

    let mut manifest = Manifest {
        routes: Vec::with_capacity(rendered.len()),
        features: &FEATURES,
        steps: &STEPS,
        actions: HERO_ACTIONS.into_iter().chain([CTA_ACTION]).collect(),
    };
    for (route, page, html) in rendered {
        let file = file_for(route);
        write(&out_dir.join(&file), &html)?;
        info!("{route} -> {file}");
        manifest.routes.push(ExportedRoute {
            path: route.to_string(),
            file,
            page,
        });
    }

    let json = serde_json::to_string_pretty(&manifest).context("serializing manifest")?;
    write(&out_dir.join(MANIFEST_FILE), &json)?;
    Ok(manifest)
}

fn write(target: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(target, contents).with_context(|| format!("writing {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_paths() {
        assert_eq!(file_for("/"), "index.html");
        assert_eq!(file_for("/home"), "home/index.html");
        assert_eq!(file_for("/home/"), "home/index.html");
    }

    #[test]
    fn unknown_route_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let paths = vec!["/".to_string(), "/doctors".to_string()];

        let err = export(&paths, &DocumentOptions::default(), &out).unwrap_err();
        assert!(err.to_string().contains("/doctors"));
        assert!(!out.exists());
    }

    #[test]
    fn exports_every_route_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<String> = routes::ROUTES.iter().map(|(p, _)| p.to_string()).collect();

        let manifest = export(&paths, &DocumentOptions::default(), dir.path()).unwrap();
        assert_eq!(manifest.routes.len(), 2);

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        let home = fs::read_to_string(dir.path().join("home/index.html")).unwrap();
        assert_eq!(index, home);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(json["routes"][1]["file"], "home/index.html");
        assert_eq!(json["routes"][0]["page"], "home");
        assert_eq!(json["features"].as_array().unwrap().len(), 4);
        assert_eq!(json["steps"].as_array().unwrap().len(), 3);

        let actions = json["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[1]["label"], "Browse Doctors");
        assert_eq!(actions[1]["target"], "doctors");
        assert_eq!(actions[2]["variant"], "light");
    }

    #[test]
    fn query_and_trailing_slash_export_under_route_name() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec!["/home?ref=mail".to_string(), "/#top".to_string()];

        let manifest = export(&paths, &DocumentOptions::default(), dir.path()).unwrap();
        let exported: Vec<_> = manifest
            .routes
            .iter()
            .map(|r| (r.path.as_str(), r.file.as_str()))
            .collect();
        assert_eq!(exported, [("/home", "home/index.html"), ("/", "index.html")]);
        assert!(dir.path().join("home/index.html").exists());
        assert!(!dir.path().join("home?ref=mail").exists());
    }

    #[test]
    fn duplicate_routes_export_once() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<String> = ["/home/", "/home", "/home?x=1", "/"]
            .iter()
            .map(|p| p.to_string())
            .collect();

        let manifest = export(&paths, &DocumentOptions::default(), dir.path()).unwrap();
        let files: Vec<_> = manifest.routes.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, ["home/index.html", "index.html"]);
    }
}
