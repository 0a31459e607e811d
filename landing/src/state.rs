//! Reactive view of the storefront store.
//!
//! The store lives in local (non-`Send`) arena storage owned by the `App`
//! component, so it is dropped, and its carousel timer cancelled, when the
//! app is unmounted. Store events are mirrored into signals that the sections
//! read; sections never keep their own mode, slide or menu state.

use leptos::prelude::*;
use storefront_core::{
    BusinessMode, ModeContent, Section, SiteConfig, Storefront, StorefrontEvent, Theme,
};
use tracing::{debug, warn};

use crate::platform::{DomLocator, WebTicker};

#[derive(Clone, Copy)]
pub struct SiteState {
    store: StoredValue<Storefront<WebTicker>, LocalStorage>,
    mode: ReadSignal<BusinessMode>,
    slide: ReadSignal<usize>,
    menu_open: ReadSignal<bool>,
}

impl SiteState {
    pub fn new(config: &SiteConfig) -> Self {
        let store = Storefront::new(config, WebTicker);
        let (mode, set_mode) = signal(store.mode());
        let (slide, set_slide) = signal(store.slide_index());
        let (menu_open, set_menu_open) = signal(store.menu_open());

        store.subscribe(move |event| match *event {
            StorefrontEvent::ModeChanged { mode } => set_mode.set(mode),
            StorefrontEvent::SlideChanged(change) => set_slide.set(change.index),
            StorefrontEvent::MenuChanged { open } => set_menu_open.set(open),
            StorefrontEvent::Navigated { section, scrolled } => {
                debug!(section = section.anchor(), scrolled, "navigated");
            }
        });

        Self {
            store: StoredValue::new_local(store),
            mode,
            slide,
            menu_open,
        }
    }

    pub fn mode(&self) -> BusinessMode {
        self.mode.get()
    }

    pub fn theme(&self) -> Theme {
        self.mode.get().theme()
    }

    pub fn content(&self) -> &'static ModeContent {
        ModeContent::for_mode(self.mode.get())
    }

    pub fn slide(&self) -> usize {
        self.slide.get()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn set_mode(&self, mode: BusinessMode) {
        self.store.update_value(|store| {
            store.set_mode(mode);
        });
    }

    pub fn next_slide(&self) {
        self.store.with_value(|store| {
            store.advance();
        });
    }

    pub fn prev_slide(&self) {
        self.store.with_value(|store| {
            store.retreat();
        });
    }

    pub fn show_slide(&self, index: usize) {
        self.store.with_value(|store| {
            if let Err(e) = store.jump_to(index) {
                warn!("{e}");
            }
        });
    }

    pub fn toggle_menu(&self) {
        self.store.update_value(|store| {
            store.toggle_menu();
        });
    }

    pub fn navigate(&self, section: Section) {
        self.store.update_value(|store| {
            store.navigate_to(section, &DomLocator);
        });
    }
}
