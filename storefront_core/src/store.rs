//! The storefront store: mode selector, hero carousel and menu state behind
//! one unidirectional API.
//!
//! Presentation surfaces call the action methods and subscribe to
//! [`StorefrontEvent`]s; they never keep their own copy of mode, slide or menu
//! state. Dropping the store cancels the carousel timer.

use std::fmt;

use tracing::{debug, info, warn};

use crate::carousel::{CarouselController, SlideChanged};
use crate::config::SiteConfig;
use crate::content::ModeContent;
use crate::error::Result;
use crate::events::{EventBus, SubscriptionId};
use crate::mode::{BusinessMode, ModeSelector, Theme};
use crate::navigation::{MenuState, Section, SectionLocator};
use crate::slide::{Slide, SlideDeck};
use crate::timer::Ticker;

/// State change published by [`Storefront`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontEvent {
    ModeChanged { mode: BusinessMode },
    SlideChanged(SlideChanged),
    MenuChanged { open: bool },
    Navigated { section: Section, scrolled: bool },
}

pub struct Storefront<T: Ticker> {
    selector: ModeSelector,
    carousel: CarouselController<T>,
    menu: MenuState,
    events: EventBus<StorefrontEvent>,
}

impl<T: Ticker> Storefront<T> {
    pub fn new(config: &SiteConfig, ticker: T) -> Self {
        Self::with_mode(config.initial_mode, ticker, config.autoplay_interval())
    }

    /// Store showing `mode`, carousel at slide 0 and auto-advancing.
    ///
    /// If the ticker refuses to schedule, the store still works with manual
    /// carousel navigation only.
    pub fn with_mode(mode: BusinessMode, ticker: T, period: std::time::Duration) -> Self {
        let selector = ModeSelector::new(mode);
        let mut carousel = CarouselController::new(selector.slides(), ticker, period);
        let events = EventBus::new();

        let forward = events.clone();
        carousel.subscribe(move |change: &SlideChanged| {
            forward.emit(&StorefrontEvent::SlideChanged(*change));
        });

        if let Err(e) = carousel.start() {
            warn!("{e}; carousel falls back to manual navigation");
        }
        info!(mode = mode.as_label(), "storefront ready");

        Self {
            selector,
            carousel,
            menu: MenuState::default(),
            events,
        }
    }

    /// Switch business mode. The carousel is rewound and its timer restarted
    /// against the new deck. Returns `false` if `mode` was already active.
    pub fn set_mode(&mut self, mode: BusinessMode) -> bool {
        let Some(deck) = self.selector.set_mode(mode) else {
            return false;
        };
        debug!(mode = mode.as_label(), "business mode changed");
        if let Err(e) = self.carousel.reconfigure(deck) {
            warn!("{e}; carousel falls back to manual navigation");
        }
        self.events.emit(&StorefrontEvent::ModeChanged { mode });
        true
    }

    pub fn advance(&self) -> usize {
        self.carousel.advance()
    }

    pub fn retreat(&self) -> usize {
        self.carousel.retreat()
    }

    pub fn jump_to(&self, index: usize) -> Result<usize> {
        self.carousel.jump_to(index)
    }

    pub fn toggle_menu(&mut self) -> bool {
        let open = self.menu.toggle();
        self.events.emit(&StorefrontEvent::MenuChanged { open });
        open
    }

    /// Scroll to `section` and collapse the mobile menu.
    ///
    /// A section missing from the page is skipped silently; the menu is
    /// collapsed either way. Returns whether a scroll happened.
    pub fn navigate_to(&mut self, section: Section, locator: &impl SectionLocator) -> bool {
        let scrolled = locator.scroll_to(section);
        if !scrolled {
            debug!(section = section.anchor(), "section not rendered, skipping scroll");
        }
        if self.menu.close() {
            self.events.emit(&StorefrontEvent::MenuChanged { open: false });
        }
        self.events
            .emit(&StorefrontEvent::Navigated { section, scrolled });
        scrolled
    }

    pub fn mode(&self) -> BusinessMode {
        self.selector.mode()
    }

    pub fn theme(&self) -> Theme {
        self.selector.theme()
    }

    pub fn content(&self) -> &'static ModeContent {
        ModeContent::for_mode(self.selector.mode())
    }

    pub fn slides(&self) -> SlideDeck {
        self.carousel.deck()
    }

    pub fn slide_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current_slide(&self) -> &'static Slide {
        self.carousel.current()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.carousel.is_auto_advancing()
    }

    pub fn carousel(&self) -> &CarouselController<T> {
        &self.carousel
    }

    pub fn subscribe(&self, listener: impl FnMut(&StorefrontEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

impl<T: Ticker> fmt::Debug for Storefront<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("mode", &self.selector.mode())
            .field("carousel", &self.carousel)
            .field("menu", &self.menu)
            .finish()
    }
}
