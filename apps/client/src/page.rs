//! The page model the renderer populates — an explicit stand-in for the
//! DOM regions the site updates. The three sections are disjoint; no
//! rendering path touches another section's state.

use crate::handoff::{handoff_url, HandoffConfig};

/// Shown when the profile document carries no image references.
pub const FALLBACK_PROFILE_IMAGE: &str = "profile.jpg";

#[derive(Debug, Default)]
pub struct Page {
    pub profile: ProfileSection,
    pub languages: LanguageList,
    pub services: ServiceGrid,
}

#[derive(Debug, Default)]
pub struct ProfileSection {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image_src: String,
}

#[derive(Debug, Default)]
pub struct LanguageList {
    pub bars: Vec<LanguageBar>,
}

#[derive(Debug, Clone)]
pub struct LanguageBar {
    pub name: String,
    /// Percentage text shown next to the name, verbatim from the document
    /// ("250%" stays "250%").
    pub label: String,
    /// Final fill width once the animation settles, clamped to [0, 100].
    pub fill_percent: u8,
    /// Per-bar animation start offset, strictly below the fixed maximum.
    pub start_delay_ms: u64,
}

#[derive(Debug, Default)]
pub struct ServiceGrid {
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
    pub button_label: String,
}

impl ServiceCard {
    /// The card's action: produce the messaging deep link for this service,
    /// which the caller opens in a new browsing context.
    pub fn activate(&self, config: &HandoffConfig) -> String {
        handoff_url(config, &self.name)
    }
}
