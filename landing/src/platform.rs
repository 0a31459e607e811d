//! Browser bindings for the storefront store: interval timers and smooth
//! scrolling to section anchors.

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::{IntervalHandle, set_interval_with_handle};
use storefront_core::{Result, Section, SectionLocator, StorefrontError, Ticker, TimerHandle};

/// Schedules ticks through leptos' `setInterval` helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebTicker;

/// Live interval, cleared on cancel.
#[derive(Debug)]
pub struct IntervalTimer(IntervalHandle);

impl TimerHandle for IntervalTimer {
    fn cancel(self) {
        self.0.clear();
    }
}

impl Ticker for WebTicker {
    type Handle = IntervalTimer;

    fn start(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Result<IntervalTimer> {
        let on_tick = RefCell::new(on_tick);
        let handle = set_interval_with_handle(move || (*on_tick.borrow_mut())(), period)
            .map_err(|e| StorefrontError::Timer(format!("{e:?}")))?;
        Ok(IntervalTimer(handle))
    }
}

/// Finds section anchors by element id in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLocator;

impl SectionLocator for DomLocator {
    fn scroll_to(&self, section: Section) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor()))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn interval_is_registered_and_cleared() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let handle = WebTicker
            .start(
                Duration::from_secs(60),
                Box::new(move || counter.set(counter.get() + 1)),
            )
            .expect("window is available in the browser");
        handle.cancel();
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    fn locator_reports_missing_anchor() {
        assert!(!DomLocator.scroll_to(Section::Testimonials));
    }

    #[wasm_bindgen_test]
    fn locator_scrolls_to_rendered_anchor() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let anchor = document.create_element("section").expect("create section");
        anchor.set_id(Section::Services.anchor());
        let body = document.body().expect("body");
        body.append_child(&anchor).expect("append section");

        assert!(DomLocator.scroll_to(Section::Services));

        anchor.remove();
    }
}
