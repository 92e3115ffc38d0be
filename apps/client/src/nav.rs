//! Section navigation — maps nav anchors to scroll targets and tracks the
//! single active item.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Services,
    Contact,
}

impl Section {
    /// Parses an anchor href; unknown or non-fragment hrefs land on Home.
    pub fn from_href(href: &str) -> Section {
        match href.strip_prefix('#') {
            Some("skills") => Section::Skills,
            Some("services") => Section::Services,
            Some("contact") => Section::Contact,
            _ => Section::Home,
        }
    }

    /// Selector of the element the page scrolls to for this section.
    pub fn scroll_target(self) -> &'static str {
        match self {
            Section::Home => ".header",
            Section::Skills => ".skills-section",
            Section::Services => ".services-section",
            Section::Contact => ".social-links",
        }
    }
}

/// At most one nav item is active; activating one deactivates the rest.
#[derive(Debug, Default)]
pub struct NavState {
    active: Option<Section>,
}

impl NavState {
    /// Marks the section active and returns where the page should scroll.
    pub fn activate(&mut self, section: Section) -> &'static str {
        self.active = Some(section);
        section.scroll_target()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }
}
