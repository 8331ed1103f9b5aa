//! Top-level pages, one per `routes::Page` variant.

mod home;

pub use home::HomePage;
