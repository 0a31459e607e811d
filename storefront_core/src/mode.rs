//! Business mode selection and the colour theme each mode implies.
//!
//! The page serves two lines of business behind one toggle. The mode decides
//! which slide deck the carousel rotates, which copy the sections show and
//! which theme tokens the presentation layer paints with.

use serde::{Deserialize, Serialize};

use crate::slide::SlideDeck;

/// The two lines of business presented on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessMode {
    /// Construction materials supply.
    #[default]
    Materials,
    /// Event tenting and catering.
    Catering,
}

impl BusinessMode {
    pub const ALL: [BusinessMode; 2] = [BusinessMode::Materials, BusinessMode::Catering];

    /// Lowercase label, matches the serde representation.
    pub fn as_label(&self) -> &'static str {
        match self {
            BusinessMode::Materials => "materials",
            BusinessMode::Catering => "catering",
        }
    }

    /// Text on the toggle button that selects this mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            BusinessMode::Materials => "Building Materials",
            BusinessMode::Catering => "Tent & Catering",
        }
    }

    /// Brand shown in the navigation bar while this mode is active.
    pub fn brand(&self) -> &'static str {
        match self {
            BusinessMode::Materials => "R.K. Building Materials",
            BusinessMode::Catering => "Raj Tent And Caterers",
        }
    }

    pub fn slides(&self) -> SlideDeck {
        match self {
            BusinessMode::Materials => SlideDeck::MATERIALS,
            BusinessMode::Catering => SlideDeck::CATERING,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            BusinessMode::Materials => Theme::MATERIALS,
            BusinessMode::Catering => Theme::CATERING,
        }
    }
}

impl std::str::FromStr for BusinessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "materials" => Ok(BusinessMode::Materials),
            "catering" => Ok(BusinessMode::Catering),
            other => Err(format!("unknown business mode: {other}")),
        }
    }
}

/// Colour tokens for one mode. Values are CSS colours; `class` names the
/// root modifier class the stylesheet keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub class: &'static str,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub accent: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub secondary: &'static str,
}

impl Theme {
    const SECONDARY: &'static str = "#f59e0b";

    pub const MATERIALS: Theme = Theme {
        class: "theme-materials",
        primary: "#1d4ed8",
        primary_hover: "#1e40af",
        accent: "#2563eb",
        gradient_from: "#1e40af",
        gradient_to: "#2563eb",
        secondary: Self::SECONDARY,
    };

    pub const CATERING: Theme = Theme {
        class: "theme-catering",
        primary: "#dc2626",
        primary_hover: "#b91c1c",
        accent: "#dc2626",
        gradient_from: "#b91c1c",
        gradient_to: "#ef4444",
        secondary: Self::SECONDARY,
    };

    /// Inline CSS custom properties for the page root.
    pub fn css_vars(&self) -> String {
        format!(
            "--primary: {}; --primary-hover: {}; --accent: {}; --gradient-from: {}; --gradient-to: {}; --secondary: {};",
            self.primary,
            self.primary_hover,
            self.accent,
            self.gradient_from,
            self.gradient_to,
            self.secondary
        )
    }
}

/// Holds the active mode. Changing it is the only way the active deck changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSelector {
    mode: BusinessMode,
}

impl ModeSelector {
    pub fn new(mode: BusinessMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BusinessMode {
        self.mode
    }

    /// Deck that belongs to the current mode.
    pub fn slides(&self) -> SlideDeck {
        self.mode.slides()
    }

    pub fn theme(&self) -> Theme {
        self.mode.theme()
    }

    /// Switch modes. Returns the deck to reconfigure with, or `None` when the
    /// mode was already active.
    pub fn set_mode(&mut self, mode: BusinessMode) -> Option<SlideDeck> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        Some(mode.slides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_labels() {
        assert_eq!(BusinessMode::Materials.as_label(), "materials");
        assert_eq!(BusinessMode::Catering.as_label(), "catering");
        assert_eq!(BusinessMode::default(), BusinessMode::Materials);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Catering".parse::<BusinessMode>(), Ok(BusinessMode::Catering));
        assert_eq!(" materials ".parse::<BusinessMode>(), Ok(BusinessMode::Materials));
        assert!("tents".parse::<BusinessMode>().is_err());
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&BusinessMode::Catering).unwrap();
        assert_eq!(json, "\"catering\"");
    }

    #[test]
    fn each_mode_owns_its_deck_and_theme() {
        assert_eq!(BusinessMode::Materials.slides(), SlideDeck::MATERIALS);
        assert_eq!(BusinessMode::Catering.slides(), SlideDeck::CATERING);
        assert_eq!(BusinessMode::Materials.theme().class, "theme-materials");
        assert_eq!(BusinessMode::Catering.theme().primary, "#dc2626");
        assert_eq!(
            BusinessMode::Materials.theme().secondary,
            BusinessMode::Catering.theme().secondary
        );
    }

    #[test]
    fn selector_reports_deck_only_on_change() {
        let mut selector = ModeSelector::default();
        assert_eq!(selector.set_mode(BusinessMode::Materials), None);
        assert_eq!(
            selector.set_mode(BusinessMode::Catering),
            Some(SlideDeck::CATERING)
        );
        assert_eq!(selector.mode(), BusinessMode::Catering);
        assert_eq!(selector.slides(), SlideDeck::CATERING);
    }

    #[test]
    fn css_vars_cover_every_token() {
        let vars = Theme::MATERIALS.css_vars();
        assert!(vars.contains("--primary: #1d4ed8;"));
        assert!(vars.contains("--secondary: #f59e0b;"));
    }
}
