//! In-page navigation targets and the collapsible mobile menu.

use serde::{Deserialize, Serialize};

/// Named sections of the page, in nav-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Products,
    Services,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Products,
        Section::Services,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Products => "products",
            Section::Services => "services",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Nav-bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Services => "Services",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

/// Scrolls the viewport to a section.
///
/// Implementations return `false` when the section's anchor is not in the
/// rendered tree; that case must never panic.
pub trait SectionLocator {
    fn scroll_to(&self, section: Section) -> bool;
}

/// Mobile menu expansion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Collapse the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
