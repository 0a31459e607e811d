//! Shared state for the storefront landing page.
//!
//! The page presents two lines of business (construction materials and
//! event tenting/catering) behind one toggle. This crate holds everything
//! about that page that is not markup:
//!
//! - [`slide`] - slide records and non-empty decks
//! - [`mode`] - the business mode selector and its theme tokens
//! - [`carousel`] - hero carousel index arithmetic and its controller
//! - [`timer`] - owned auto-advance timers and a hand-driven test ticker
//! - [`navigation`] - page sections and the mobile menu
//! - [`store`] - the [`Storefront`] store composing the above
//! - [`content`], [`contact`], [`config`] - static copy, form fields, settings
//!
//! Nothing here touches the DOM; the browser side plugs in through the
//! [`Ticker`] and [`SectionLocator`] traits.
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_core::{BusinessMode, ManualTicker, SiteConfig, Storefront};
//!
//! let ticker = ManualTicker::new();
//! let mut store = Storefront::new(&SiteConfig::default(), ticker.clone());
//!
//! ticker.advance(Duration::from_millis(5000));
//! assert_eq!(store.slide_index(), 1);
//!
//! store.set_mode(BusinessMode::Catering);
//! assert_eq!(store.slide_index(), 0);
//! assert_eq!(ticker.active(), 1);
//! ```

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod events;
pub mod mode;
pub mod navigation;
pub mod slide;
pub mod store;
pub mod timer;

pub use carousel::{Carousel, CarouselController, SlideCause, SlideChanged};
pub use config::{ContactInfo, SiteConfig};
pub use contact::{ContactDraft, ContactField};
pub use content::ModeContent;
pub use error::{Result, StorefrontError};
pub use events::{EventBus, SubscriptionId};
pub use mode::{BusinessMode, ModeSelector, Theme};
pub use navigation::{MenuState, Section, SectionLocator};
pub use slide::{Slide, SlideDeck};
pub use store::{Storefront, StorefrontEvent};
pub use timer::{AutoAdvance, DEFAULT_PERIOD, ManualTicker, Ticker, TimerHandle};
