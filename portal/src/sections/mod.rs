//! Home page sections, rendered top to bottom in this order:
//! hero, features, steps, call-to-action.

mod action;
mod cta;
mod features;
mod hero;
mod steps;

pub use action::ActionLink;
pub use cta::CallToAction;
pub use features::Features;
pub use hero::Hero;
pub use steps::Steps;
