//! Renderer — turns fetched documents into page-model updates.
//!
//! Every render_* call fully replaces its section, so rendering twice with
//! the same document leaves the same content (no appending). An absent
//! document leaves its section untouched; the other sections render
//! independently.

use rand::Rng;

use crate::loader::FetchOutcome;
use crate::model::{LanguageEntry, ProfileInfo, ServiceEntry};
use crate::page::{LanguageBar, Page, ServiceCard, FALLBACK_PROFILE_IMAGE};

/// Upper bound on each bar's fill start offset. The jitter keeps the bars
/// from all moving at once; the settled fill width is the contract.
pub const MAX_FILL_DELAY_MS: u64 = 500;

pub struct Renderer<'a> {
    page: &'a mut Page,
}

impl<'a> Renderer<'a> {
    pub fn new(page: &'a mut Page) -> Self {
        Self { page }
    }

    pub fn render_profile(&mut self, outcome: &FetchOutcome<ProfileInfo>) {
        let FetchOutcome::Loaded(info) = outcome else {
            return;
        };
        let profile = &mut self.page.profile;
        profile.name = info.name.clone();
        profile.title = info.title.clone();
        profile.bio = info.bio.clone();
        profile.image_src = pick_image(&info.images);
    }

    pub fn render_languages(&mut self, outcome: &FetchOutcome<Vec<LanguageEntry>>) {
        let FetchOutcome::Loaded(entries) = outcome else {
            return;
        };
        let mut rng = rand::thread_rng();
        let bars = &mut self.page.languages.bars;
        bars.clear();
        for entry in entries {
            bars.push(LanguageBar {
                name: entry.name.clone(),
                label: format!("{}%", entry.percentage),
                fill_percent: entry.percentage.clamp(0, 100) as u8,
                start_delay_ms: rng.gen_range(0..MAX_FILL_DELAY_MS),
            });
        }
    }

    pub fn render_services(&mut self, outcome: &FetchOutcome<Vec<ServiceEntry>>) {
        let FetchOutcome::Loaded(entries) = outcome else {
            return;
        };
        let cards = &mut self.page.services.cards;
        cards.clear();
        for entry in entries {
            cards.push(ServiceCard {
                name: entry.name.clone(),
                description: entry.description.clone(),
                button_label: entry.button_label.clone(),
            });
        }
    }
}

/// Uniformly random choice among the authored images; fixed fallback when
/// there are none.
fn pick_image(images: &[String]) -> String {
    if images.is_empty() {
        return FALLBACK_PROFILE_IMAGE.to_string();
    }
    let index = rand::thread_rng().gen_range(0..images.len());
    images[index].clone()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::loader::{FetchFailure, FetchOutcome};

    fn languages() -> FetchOutcome<Vec<LanguageEntry>> {
        FetchOutcome::Loaded(vec![
            LanguageEntry {
                name: "Go".to_string(),
                percentage: 80,
            },
            LanguageEntry {
                name: "Rust".to_string(),
                percentage: 95,
            },
        ])
    }

    fn profile(images: Vec<String>) -> FetchOutcome<ProfileInfo> {
        FetchOutcome::Loaded(ProfileInfo {
            name: "Dina".to_string(),
            title: "Engineer".to_string(),
            bio: "hi".to_string(),
            images,
        })
    }

    fn absent<T>() -> FetchOutcome<T> {
        FetchOutcome::Absent(FetchFailure::Status(reqwest::StatusCode::BAD_GATEWAY))
    }

    #[test]
    fn test_rendering_twice_does_not_duplicate() {
        let mut page = Page::default();
        let mut renderer = Renderer::new(&mut page);
        let docs = languages();
        renderer.render_languages(&docs);
        renderer.render_languages(&docs);
        assert_eq!(page.languages.bars.len(), 2);
        assert_eq!(page.languages.bars[0].name, "Go");
        assert_eq!(page.languages.bars[1].name, "Rust");
    }

    #[test]
    fn test_language_order_and_fill_state() {
        let mut page = Page::default();
        Renderer::new(&mut page).render_languages(&languages());
        let bars = &page.languages.bars;
        assert_eq!(bars[0].fill_percent, 80);
        assert_eq!(bars[0].label, "80%");
        assert!(bars.iter().all(|b| b.start_delay_ms < MAX_FILL_DELAY_MS));
    }

    #[test]
    fn test_out_of_range_percentages_are_clamped_not_rejected() {
        let docs = FetchOutcome::Loaded(vec![
            LanguageEntry {
                name: "Brainfuck".to_string(),
                percentage: 250,
            },
            LanguageEntry {
                name: "COBOL".to_string(),
                percentage: -5,
            },
        ]);
        let mut page = Page::default();
        Renderer::new(&mut page).render_languages(&docs);
        let bars = &page.languages.bars;
        assert_eq!(bars[0].fill_percent, 100);
        assert_eq!(bars[0].label, "250%");
        assert_eq!(bars[1].fill_percent, 0);
        assert_eq!(bars[1].label, "-5%");
    }

    #[test]
    fn test_absent_document_leaves_section_untouched() {
        let mut page = Page::default();
        let mut renderer = Renderer::new(&mut page);
        renderer.render_languages(&languages());
        renderer.render_languages(&absent());
        renderer.render_profile(&absent());
        renderer.render_services(&absent());
        assert_eq!(page.languages.bars.len(), 2);
        assert_eq!(page.profile.name, "");
        assert!(page.services.cards.is_empty());
    }

    #[test]
    fn test_profile_fields_and_service_cards() {
        let mut page = Page::default();
        let mut renderer = Renderer::new(&mut page);
        renderer.render_profile(&profile(vec!["a.jpg".to_string()]));
        renderer.render_services(&FetchOutcome::Loaded(vec![ServiceEntry {
            name: "Logo Design".to_string(),
            description: "d".to_string(),
            button_label: "Order".to_string(),
        }]));
        assert_eq!(page.profile.name, "Dina");
        assert_eq!(page.profile.image_src, "a.jpg");
        assert_eq!(page.services.cards.len(), 1);
        assert_eq!(page.services.cards[0].button_label, "Order");
    }

    #[test]
    fn test_empty_images_fall_back_to_fixed_reference() {
        let mut page = Page::default();
        for _ in 0..20 {
            Renderer::new(&mut page).render_profile(&profile(vec![]));
            assert_eq!(page.profile.image_src, FALLBACK_PROFILE_IMAGE);
        }
    }

    #[test]
    fn test_image_choice_is_roughly_uniform() {
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        let trials = 3000;
        let mut counts: HashMap<String, u32> = HashMap::new();

        let mut page = Page::default();
        for _ in 0..trials {
            Renderer::new(&mut page).render_profile(&profile(images.clone()));
            *counts.entry(page.profile.image_src.clone()).or_default() += 1;
        }

        assert_eq!(counts.len(), images.len());
        for (image, count) in counts {
            // Expected 1000 per image; a wide band keeps this stable.
            assert!(
                (700..=1300).contains(&count),
                "{image} chosen {count} times in {trials}"
            );
        }
    }
}
