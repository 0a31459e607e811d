//! Hero carousel: index arithmetic over a slide deck plus the controller
//! that drives it from an auto-advance timer.
//!
//! [`Carousel`] is the plain state machine. [`CarouselController`] wraps it in
//! shared state, owns the auto-advance timer and publishes a [`SlideChanged`]
//! event after every transition.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Result, StorefrontError};
use crate::events::{EventBus, SubscriptionId};
use crate::slide::{Slide, SlideDeck};
use crate::timer::{AutoAdvance, Ticker};

/// Index into the active deck. `index < deck.len()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    deck: SlideDeck,
    index: usize,
}

impl Carousel {
    pub fn new(deck: SlideDeck) -> Self {
        Self { deck, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn deck(&self) -> SlideDeck {
        self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The one fully visible slide.
    pub fn current(&self) -> &'static Slide {
        &self.deck.slides()[self.index]
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Step forward, wrapping to the first slide after the last.
    pub fn advance(&mut self) -> usize {
        self.index = if self.index + 1 == self.deck.len() {
            0
        } else {
            self.index + 1
        };
        self.index
    }

    /// Step back, wrapping to the last slide before the first.
    pub fn retreat(&mut self) -> usize {
        self.index = if self.index == 0 {
            self.deck.len() - 1
        } else {
            self.index - 1
        };
        self.index
    }

    pub fn jump_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.deck.len() {
            return Err(StorefrontError::SlideOutOfRange {
                index,
                len: self.deck.len(),
            });
        }
        self.index = index;
        Ok(index)
    }

    /// Swap the deck and rewind to the first slide.
    pub fn reconfigure(&mut self, deck: SlideDeck) {
        self.deck = deck;
        self.index = 0;
    }
}

/// What moved the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCause {
    Tick,
    Advance,
    Retreat,
    Jump,
    Reconfigure,
}

/// Published after every carousel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChanged {
    pub index: usize,
    pub len: usize,
    pub cause: SlideCause,
}

impl SlideChanged {
    fn of(carousel: &Carousel, cause: SlideCause) -> Self {
        Self {
            index: carousel.index(),
            len: carousel.len(),
            cause,
        }
    }
}

/// Carousel state plus the timer that advances it.
///
/// Manual navigation does not touch the timer, so a manual `advance` can be
/// followed by a tick sooner than one full period. Only `reconfigure` (and
/// `start`) restart the cadence.
pub struct CarouselController<T: Ticker> {
    state: Rc<RefCell<Carousel>>,
    events: EventBus<SlideChanged>,
    timer: AutoAdvance<T>,
}

impl<T: Ticker> CarouselController<T> {
    /// Controller at slide 0 with no timer running yet.
    pub fn new(deck: SlideDeck, ticker: T, period: Duration) -> Self {
        Self {
            state: Rc::new(RefCell::new(Carousel::new(deck))),
            events: EventBus::new(),
            timer: AutoAdvance::new(ticker, period),
        }
    }

    /// Controller at slide 0 with auto-advance running.
    pub fn initialize(deck: SlideDeck, ticker: T, period: Duration) -> Result<Self> {
        let mut controller = Self::new(deck, ticker, period);
        controller.start()?;
        Ok(controller)
    }

    /// (Re)start the auto-advance timer with a fresh phase.
    pub fn start(&mut self) -> Result<()> {
        let state = Rc::downgrade(&self.state);
        let events = self.events.clone();
        self.timer.arm(move || {
            // Controller gone: nothing left to advance.
            let Some(state) = state.upgrade() else {
                return;
            };
            let change = {
                let mut carousel = state.borrow_mut();
                carousel.advance();
                SlideChanged::of(&carousel, SlideCause::Tick)
            };
            trace!(index = change.index, "carousel tick");
            events.emit(&change);
        })
    }

    /// Stop auto-advance; manual navigation keeps working.
    pub fn stop(&mut self) -> bool {
        self.timer.disarm()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn period(&self) -> Duration {
        self.timer.period()
    }

    /// Same transition the timer performs, for hosts that drive time themselves.
    pub fn tick(&self) -> usize {
        self.apply(SlideCause::Tick, |c| {
            c.advance();
        })
    }

    pub fn advance(&self) -> usize {
        self.apply(SlideCause::Advance, |c| {
            c.advance();
        })
    }

    pub fn retreat(&self) -> usize {
        self.apply(SlideCause::Retreat, |c| {
            c.retreat();
        })
    }

    pub fn jump_to(&self, index: usize) -> Result<usize> {
        self.state.borrow_mut().jump_to(index)?;
        Ok(self.publish(SlideCause::Jump))
    }

    /// Swap decks, rewind to slide 0 and restart the timer against the new
    /// deck. The old timer is cancelled before the new one is scheduled.
    pub fn reconfigure(&mut self, deck: SlideDeck) -> Result<()> {
        self.timer.disarm();
        self.apply(SlideCause::Reconfigure, |c| c.reconfigure(deck));
        debug!(len = deck.len(), "carousel reconfigured");
        self.start()
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    pub fn current(&self) -> &'static Slide {
        self.state.borrow().current()
    }

    pub fn deck(&self) -> SlideDeck {
        self.state.borrow().deck()
    }

    pub fn snapshot(&self) -> Carousel {
        *self.state.borrow()
    }

    pub fn subscribe(&self, listener: impl FnMut(&SlideChanged) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn apply(&self, cause: SlideCause, step: impl FnOnce(&mut Carousel)) -> usize {
        step(&mut *self.state.borrow_mut());
        self.publish(cause)
    }

    fn publish(&self, cause: SlideCause) -> usize {
        let change = SlideChanged::of(&self.state.borrow(), cause);
        self.events.emit(&change);
        change.index
    }
}

impl<T: Ticker> fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("carousel", &*self.state.borrow())
            .field("timer", &self.timer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Slide;
    use crate::timer::{DEFAULT_PERIOD, ManualTicker};
    use pretty_assertions::assert_eq;

    static FIVE: [Slide; 5] = [
        Slide::new(1, "a", "A"),
        Slide::new(2, "b", "B"),
        Slide::new(3, "c", "C"),
        Slide::new(4, "d", "D"),
        Slide::new(5, "e", "E"),
    ];

    fn deck(n: usize) -> SlideDeck {
        SlideDeck::new(&FIVE[..n]).unwrap()
    }

    #[test]
    fn advance_and_retreat_wrap_for_every_length() {
        for n in 1..=5 {
            for start in 0..n {
                let mut forward = Carousel::new(deck(n));
                forward.jump_to(start).unwrap();
                assert_eq!(forward.advance(), (start + 1) % n, "advance n={n} i={start}");

                let mut back = Carousel::new(deck(n));
                back.jump_to(start).unwrap();
                assert_eq!(back.retreat(), (start + n - 1) % n, "retreat n={n} i={start}");
            }
        }
    }

    #[test]
    fn jump_out_of_range_is_rejected_without_moving() {
        let mut carousel = Carousel::new(deck(3));
        carousel.advance();
        assert_eq!(
            carousel.jump_to(3),
            Err(StorefrontError::SlideOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn reconfigure_rewinds_even_from_a_higher_index() {
        let mut carousel = Carousel::new(deck(5));
        carousel.jump_to(4).unwrap();
        carousel.reconfigure(deck(2));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 2);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut carousel = Carousel::new(deck(4));
        carousel.retreat();
        let active: Vec<usize> = (0..carousel.len())
            .filter(|i| carousel.is_active(*i))
            .collect();
        assert_eq!(active, vec![3]);
        assert_eq!(carousel.current().label, "d");
    }

    #[test]
    fn controller_publishes_every_transition() {
        let ticker = ManualTicker::new();
        let mut controller = CarouselController::initialize(deck(3), ticker.clone(), DEFAULT_PERIOD).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |c| sink.borrow_mut().push((c.cause, c.index)));

        ticker.advance(DEFAULT_PERIOD);
        controller.retreat();
        controller.jump_to(2).unwrap();
        controller.advance();
        controller.reconfigure(deck(2)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (SlideCause::Tick, 1),
                (SlideCause::Retreat, 0),
                (SlideCause::Jump, 2),
                (SlideCause::Advance, 0),
                (SlideCause::Reconfigure, 0),
            ]
        );
    }

    #[test]
    fn failed_jump_publishes_nothing() {
        let controller = CarouselController::new(deck(3), ManualTicker::new(), DEFAULT_PERIOD);
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        controller.subscribe(move |_| *sink.borrow_mut() += 1);
        assert!(controller.jump_to(7).is_err());
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn manual_advance_keeps_timer_phase() {
        let ticker = ManualTicker::new();
        let controller = CarouselController::initialize(deck(3), ticker.clone(), DEFAULT_PERIOD).unwrap();

        ticker.advance(Duration::from_millis(4000));
        controller.advance();
        assert_eq!(controller.index(), 1);
        // Auto tick lands 1s after the manual step.
        ticker.advance(Duration::from_millis(1000));
        assert_eq!(controller.index(), 2);
        assert_eq!(ticker.started(), 1);
    }

    #[test]
    fn reconfigure_restarts_cadence_against_new_deck() {
        let ticker = ManualTicker::new();
        let mut controller = CarouselController::initialize(deck(5), ticker.clone(), DEFAULT_PERIOD).unwrap();
        ticker.advance(Duration::from_millis(4 * 5000));
        assert_eq!(controller.index(), 4);

        ticker.advance(Duration::from_millis(2500));
        controller.reconfigure(deck(2)).unwrap();
        assert_eq!(controller.index(), 0);
        assert_eq!(ticker.active(), 1);
        assert_eq!(ticker.cancelled(), 1);

        ticker.advance(Duration::from_millis(4999));
        assert_eq!(controller.index(), 0);
        ticker.advance(Duration::from_millis(1));
        assert_eq!(controller.index(), 1);
        ticker.advance(DEFAULT_PERIOD);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn dropping_controller_cancels_timer() {
        let ticker = ManualTicker::new();
        let controller = CarouselController::initialize(deck(3), ticker.clone(), DEFAULT_PERIOD).unwrap();
        assert!(controller.is_auto_advancing());
        drop(controller);
        assert_eq!(ticker.active(), 0);
        assert_eq!(ticker.advance(DEFAULT_PERIOD * 3), 0);
    }

    #[test]
    fn stopped_controller_still_navigates() {
        let ticker = ManualTicker::new();
        let mut controller = CarouselController::initialize(deck(3), ticker.clone(), DEFAULT_PERIOD).unwrap();
        assert!(controller.stop());
        ticker.advance(DEFAULT_PERIOD * 2);
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.retreat(), 2);
        assert_eq!(controller.current().label, "c");
    }
}
