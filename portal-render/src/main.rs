//! # portal-render
//!
//! Renders every portal route to static HTML, for hosting without a
//! WASM bundle or as a crawlable fallback.
//!
//! ```bash
//! portal-render --out-dir dist
//! portal-render --route /home --stylesheet /assets/site.css --no-default-stylesheet
//! portal-render --resolve /home/?ref=mail
//! ```

mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, error, info};

use medical_portal::{DocumentOptions, routes};

#[derive(Parser, Debug)]
#[command(name = "portal-render")]
#[command(about = "Render medical portal routes to static HTML")]
#[command(version)]
struct Args {
    /// Output directory (created if missing)
    #[arg(long, short, default_value = "dist")]
    out_dir: PathBuf,

    /// Route to render; repeatable. Defaults to every configured route
    #[arg(long = "route", value_name = "PATH")]
    routes: Vec<String>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Extra stylesheet URL; repeatable
    #[arg(long = "stylesheet", value_name = "URL")]
    stylesheets: Vec<String>,

    /// Drop the Bootstrap CDN stylesheets
    #[arg(long)]
    no_default_stylesheet: bool,

    /// Print the page a path resolves to, then exit
    #[arg(long, value_name = "PATH", conflicts_with = "routes")]
    resolve: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn document_options(&self) -> DocumentOptions {
        let mut options = DocumentOptions::default();
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if self.no_default_stylesheet {
            options.stylesheets.clear();
        }
        options.stylesheets.extend(self.stylesheets.iter().cloned());
        options
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.resolve {
        match routes::resolve(path) {
            Some(page) => {
                println!("{}", page.name());
                return Ok(());
            }
            None => bail!("no route for {path:?}"),
        }
    }

    let paths: Vec<String> = if args.routes.is_empty() {
        routes::ROUTES.iter().map(|(path, _)| path.to_string()).collect()
    } else {
        args.routes.clone()
    };
    debug!(?paths, "routes selected");

    let options = args.document_options();
    let manifest = export::export(&paths, &options, &args.out_dir)?;
    info!(
        "Rendered {} route(s) to {}",
        manifest.routes.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
