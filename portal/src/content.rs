//! Static copy for the home page.
//!
//! Everything here is a compile-time constant: the page has no props and no
//! data source, so the same text renders every time.

use serde::Serialize;

use crate::routes::NavTarget;

/// Brand name shown in the document title and hero eyebrow.
pub const BRAND: &str = "MedConsult";

/// Hero headline, split so the accent part can be styled separately.
pub const HERO_TITLE: &str = "Get Expert Medical";
/// Highlighted tail of the headline.
pub const HERO_TITLE_ACCENT: &str = "Second Opinions";
/// Lead paragraph under the headline.
pub const HERO_LEAD: &str = "Connect with verified doctors and get professional medical consultations \
from the comfort of your home. Your health deserves expert attention.";

/// Feature grid heading.
pub const FEATURES_TITLE: &str = "Why patients choose us";
/// Subheading under [`FEATURES_TITLE`].
pub const FEATURES_DESCRIPTION: &str =
    "Specialist care without the waiting room, backed by doctors you can verify.";

/// "How it works" heading.
pub const STEPS_TITLE: &str = "How it works";
/// Subheading under [`STEPS_TITLE`].
pub const STEPS_DESCRIPTION: &str = "Three steps from question to answer.";

/// Closing call-to-action heading.
pub const CTA_TITLE: &str = "Ready to get a second opinion?";
/// Lead under [`CTA_TITLE`].
pub const CTA_DESCRIPTION: &str =
    "Join patients who made confident decisions about their health.";

/// A card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Bootstrap Icons identifier, rendered as `bi bi-{icon}`.
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence body
    pub description: &'static str,
}

/// A card in the "how it works" row. Its number is its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Bootstrap Icons identifier
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence body
    pub description: &'static str,
}

/// Visual weight of an affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Solid brand colour, for the main hero action
    Primary,
    /// Outlined, for secondary actions
    Outline,
    /// Light on the coloured call-to-action band
    Light,
}

impl Variant {
    /// Bootstrap button classes for this variant.
    pub fn class(self) -> &'static str {
        match self {
            Variant::Primary => "btn btn-primary btn-lg",
            Variant::Outline => "btn btn-outline-primary btn-lg",
            Variant::Light => "btn btn-light btn-lg",
        }
    }
}

/// A control that issues a navigation intent when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affordance {
    /// Visible link text
    pub label: &'static str,
    /// Where activation navigates
    pub target: NavTarget,
    /// Button styling
    pub variant: Variant,
}

/// Feature grid cards, in display order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "patch-check",
        title: "Verified Specialists",
        description: "Every doctor is licence-checked and board-certified before joining the platform.",
    },
    Feature {
        icon: "camera-video",
        title: "Online Consultations",
        description: "Meet your doctor over secure video or chat, wherever you are.",
    },
    Feature {
        icon: "shield-lock",
        title: "Private and Secure",
        description: "Medical records are encrypted in transit and at rest, and shared only with your doctor.",
    },
    Feature {
        icon: "clock-history",
        title: "Fast Turnaround",
        description: "Receive a written second opinion within days, not weeks.",
    },
];

/// "How it works" cards, in display order.
pub const STEPS: [Step; 3] = [
    Step {
        icon: "person-plus",
        title: "Create your account",
        description: "Sign up in minutes and tell us about your case.",
    },
    Step {
        icon: "search-heart",
        title: "Choose a doctor",
        description: "Browse verified specialists by field, language, and availability.",
    },
    Step {
        icon: "file-earmark-medical",
        title: "Get your opinion",
        description: "Share your records, consult, and receive a detailed written report.",
    },
];

/// Hero buttons: sign up, then browse doctors.
pub const HERO_ACTIONS: [Affordance; 2] = [
    Affordance {
        label: "Get Started",
        target: NavTarget::Register,
        variant: Variant::Primary,
    },
    Affordance {
        label: "Browse Doctors",
        target: NavTarget::Doctors,
        variant: Variant::Outline,
    },
];

/// The single call-to-action button.
pub const CTA_ACTION: Affordance = Affordance {
    label: "Create Your Account",
    target: NavTarget::Register,
    variant: Variant::Light,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_card_counts() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STEPS.len(), 3);
    }

    #[test]
    fn affordances_point_at_external_pages() {
        let targets: Vec<_> = HERO_ACTIONS.iter().map(|a| a.target.href()).collect();
        assert_eq!(targets, ["/register", "/doctors"]);
        assert_eq!(CTA_ACTION.target.href(), "/register");
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.extend(STEPS.iter().map(|s| s.title));
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), total);
    }
}
