use thiserror::Error;

/// Failure to render a path to HTML.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The path is not in the route table.
    #[error("no route for {0:?}")]
    UnknownRoute(String),
}
