//! Slide records and the non-empty decks the carousel rotates through.

use serde::Serialize;

use crate::error::{Result, StorefrontError};

/// One carousel slide. Immutable; decks are swapped wholesale, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// Unique within its deck, used as the render key.
    pub id: u32,
    /// Short label shown on the image placeholder and used as alt text.
    pub label: &'static str,
    /// Caption rendered under the slide.
    pub description: &'static str,
}

impl Slide {
    pub const fn new(id: u32, label: &'static str, description: &'static str) -> Self {
        Self {
            id,
            label,
            description,
        }
    }
}

const MATERIAL_SLIDES: [Slide; 3] = [
    Slide::new(
        1,
        "Premium cement products",
        "High-quality cement for all construction needs",
    ),
    Slide::new(
        2,
        "Construction materials display",
        "Wide range of building materials available",
    ),
    Slide::new(
        3,
        "Steel reinforcement bars",
        "Durable steel products for construction",
    ),
];

const CATERING_SLIDES: [Slide; 3] = [
    Slide::new(
        1,
        "Elegant wedding setup",
        "Beautiful wedding tent arrangements",
    ),
    Slide::new(
        2,
        "Corporate event catering",
        "Professional catering services for corporate events",
    ),
    Slide::new(
        3,
        "Birthday party setup",
        "Colorful tent and catering setup for celebrations",
    ),
];

/// A non-empty, immutable list of slides.
///
/// The only way to build a deck at runtime is [`SlideDeck::new`], which rejects
/// empty lists, so index arithmetic over a deck never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDeck {
    slides: &'static [Slide],
}

impl SlideDeck {
    /// Building-materials hero slides.
    pub const MATERIALS: SlideDeck = SlideDeck {
        slides: &MATERIAL_SLIDES,
    };

    /// Tent and catering hero slides.
    pub const CATERING: SlideDeck = SlideDeck {
        slides: &CATERING_SLIDES,
    };

    pub fn new(slides: &'static [Slide]) -> Result<Self> {
        if slides.is_empty() {
            return Err(StorefrontError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// Number of slides; always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; present so the type reads like a collection.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&'static Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Slide> {
        self.slides.iter()
    }
}
