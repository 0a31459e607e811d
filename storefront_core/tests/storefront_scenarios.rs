use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use storefront_core::{
    BusinessMode, CarouselController, DEFAULT_PERIOD, ManualTicker, Section, SectionLocator,
    SiteConfig, Slide, SlideCause, SlideDeck, Storefront, StorefrontEvent,
};

static ABC: [Slide; 3] = [
    Slide::new(1, "A", "first"),
    Slide::new(2, "B", "second"),
    Slide::new(3, "C", "third"),
];

/// Page where nothing has been rendered yet.
struct EmptyPage;

impl SectionLocator for EmptyPage {
    fn scroll_to(&self, _: Section) -> bool {
        false
    }
}

fn store() -> (Storefront<ManualTicker>, ManualTicker) {
    let ticker = ManualTicker::new();
    let store = Storefront::new(&SiteConfig::default(), ticker.clone());
    (store, ticker)
}

#[test]
fn tick_retreat_jump_tick_walkthrough() {
    let ticker = ManualTicker::new();
    let deck = SlideDeck::new(&ABC).expect("non-empty deck");
    let controller =
        CarouselController::initialize(deck, ticker.clone(), DEFAULT_PERIOD).expect("timer");

    assert_eq!(controller.index(), 0);
    ticker.advance(DEFAULT_PERIOD);
    assert_eq!(controller.index(), 1);
    controller.retreat();
    assert_eq!(controller.index(), 0);
    controller.jump_to(2).expect("in range");
    assert_eq!(controller.index(), 2);
    ticker.advance(DEFAULT_PERIOD);
    assert_eq!(controller.index(), 0);
    assert_eq!(controller.current().label, "A");
}

#[test]
fn switching_to_catering_swaps_deck_and_cancels_materials_timer() {
    let (mut store, ticker) = store();
    ticker.advance(DEFAULT_PERIOD * 2);
    assert_eq!(store.slide_index(), 2);

    assert!(store.set_mode(BusinessMode::Catering));

    assert_eq!(store.mode(), BusinessMode::Catering);
    assert_eq!(store.slides(), SlideDeck::CATERING);
    assert_eq!(store.slide_index(), 0);
    assert_eq!(store.current_slide().label, "Elegant wedding setup");
    assert_eq!(ticker.cancelled(), 1);
    assert_eq!(ticker.active(), 1);
}

#[test]
fn at_most_one_timer_across_mode_flapping() {
    let (mut store, ticker) = store();
    let modes = [
        BusinessMode::Catering,
        BusinessMode::Catering,
        BusinessMode::Materials,
        BusinessMode::Catering,
        BusinessMode::Materials,
        BusinessMode::Materials,
    ];
    for mode in modes {
        store.set_mode(mode);
        assert!(ticker.active() <= 1, "leaked timer after {mode:?}");
        ticker.advance(Duration::from_millis(1200));
    }
    assert_eq!(ticker.active(), 1);
    assert_eq!(ticker.started(), ticker.cancelled() + 1);
}

#[test]
fn no_double_advance_after_mode_change() {
    let (mut store, ticker) = store();
    let ticks = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&ticks);
    store.subscribe(move |e| {
        if matches!(e, StorefrontEvent::SlideChanged(change) if change.cause == SlideCause::Tick) {
            *sink.borrow_mut() += 1;
        }
    });

    store.set_mode(BusinessMode::Catering);
    store.set_mode(BusinessMode::Materials);
    ticker.advance(DEFAULT_PERIOD);

    assert_eq!(*ticks.borrow(), 1);
    assert_eq!(store.slide_index(), 1);
}

#[test]
fn jump_keeps_mode_and_deck() {
    let (mut store, _ticker) = store();
    store.set_mode(BusinessMode::Catering);
    for k in 0..store.slides().len() {
        assert_eq!(store.jump_to(k), Ok(k));
        assert_eq!(store.slide_index(), k);
        assert_eq!(store.mode(), BusinessMode::Catering);
        assert_eq!(store.slides(), SlideDeck::CATERING);
    }
}

#[test]
fn navigating_to_unrendered_section_only_clears_menu() {
    let (mut store, ticker) = store();
    ticker.advance(DEFAULT_PERIOD);
    store.toggle_menu();

    let scrolled = store.navigate_to(Section::Testimonials, &EmptyPage);

    assert!(!scrolled);
    assert!(!store.menu_open());
    assert_eq!(store.mode(), BusinessMode::Materials);
    assert_eq!(store.slide_index(), 1);
}

#[test]
fn dropping_the_store_stops_auto_advance() {
    let (store, ticker) = store();
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    drop(store);
    assert_eq!(ticker.active(), 0);
    assert_eq!(ticker.advance(DEFAULT_PERIOD * 4), 0);
    assert_eq!(*seen.borrow(), 0);
}
