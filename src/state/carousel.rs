//! Carousel composition root.
//!
//! Wires the partitioner, slide machine, input arbitrator, swipe tracker and
//! autoplay timer together. All mutation flows through [`Carousel::handle`]
//! (or the resize/item/hover entry points), each of which commits its result
//! synchronously before returning.

use super::arbitrator::{InputArbitrator, InputEvent};
use super::autoplay::{AutoplayConditions, AutoplayTimer};
use super::slide_state::{SlideMachine, SlideState, TransitionOutcome, TransitionRequest};
use super::swipe::{PointerPos, SwipeConfig, SwipeTracker};
use crate::model::Item;
use crate::view_state::{page_at, page_count, partition, Breakpoints, ViewportClass};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Tunables for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Autoplay cadence.
    pub autoplay_interval: Duration,
    /// Swipe recognition thresholds.
    pub swipe: SwipeConfig,
    /// Width → items-per-page mapping.
    pub breakpoints: Breakpoints,
    /// Whether autoplay starts enabled.
    pub start_playing: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(4000),
            swipe: SwipeConfig::default(),
            breakpoints: Breakpoints::default(),
            start_playing: true,
        }
    }
}

/// A responsive, auto-advancing carousel over a list of items.
///
/// Pages are never stored: they are sliced from `items` at the current
/// visible count whenever asked for.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Item>,
    settings: CarouselSettings,
    viewport_width: u32,
    visible_count: usize,
    machine: SlideMachine,
    arbitrator: InputArbitrator,
    swipe: SwipeTracker,
    autoplay: AutoplayTimer,
    hovered: bool,
    mounted: bool,
}

impl Carousel {
    /// Mount a carousel for `items` at `viewport_width` pixels.
    pub fn new(
        items: Vec<Item>,
        viewport_width: u32,
        settings: CarouselSettings,
        now: Instant,
    ) -> Self {
        let visible_count = settings.breakpoints.visible_count(viewport_width);
        let mut machine = SlideMachine::new(page_count(items.len(), visible_count));
        if !settings.start_playing {
            machine.set_playing(false);
        }

        let mut carousel = Self {
            items,
            settings,
            viewport_width,
            visible_count,
            machine,
            arbitrator: InputArbitrator::new(),
            swipe: SwipeTracker::new(settings.swipe),
            autoplay: AutoplayTimer::new(settings.autoplay_interval),
            hovered: false,
            mounted: true,
        };
        carousel.sync_autoplay(now);
        carousel
    }

    // ===== Read side =====

    /// The items being shown, in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current slide snapshot.
    pub fn state(&self) -> SlideState {
        self.machine.state()
    }

    /// Number of pages. At least 1.
    pub fn page_count(&self) -> usize {
        self.machine.page_count()
    }

    /// Items per page at the current viewport width.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Last applied viewport width in pixels.
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Width class at the current viewport width.
    pub fn viewport_class(&self) -> ViewportClass {
        self.settings.breakpoints.classify(self.viewport_width)
    }

    /// All pages, freshly derived.
    pub fn pages(&self) -> Vec<&[Item]> {
        partition(&self.items, self.visible_count)
    }

    /// Items on the current page.
    pub fn current_page(&self) -> &[Item] {
        page_at(&self.items, self.visible_count, self.state().current_index())
    }

    /// Fraction of the deck reached, `(index + 1) / page_count`.
    pub fn progress(&self) -> f64 {
        (self.state().current_index() + 1) as f64 / self.page_count() as f64
    }

    /// "`n` of `total`" label, 1-based.
    pub fn counter_label(&self) -> String {
        format!("{} of {}", self.state().current_index() + 1, self.page_count())
    }

    /// Whether navigation controls apply (more than one page).
    pub fn has_controls(&self) -> bool {
        self.page_count() > 1
    }

    /// Whether the pointer is over the carousel.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether keyboard focus is inside the carousel.
    pub fn has_focus(&self) -> bool {
        self.arbitrator.focus_within()
    }

    /// Whether the autoplay countdown is active.
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// When the next autoplay tick is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    // ===== Write side =====

    /// Route one input event through the arbitrator into the machine.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> TransitionOutcome {
        let state = self.machine.state();
        let Some(request) = self.arbitrator.translate(event, &state, self.page_count()) else {
            return TransitionOutcome::Unchanged;
        };
        self.dispatch(request, now)
    }

    /// Apply a request directly (already arbitrated).
    pub fn dispatch(&mut self, request: TransitionRequest, now: Instant) -> TransitionOutcome {
        let outcome = self.machine.apply(request);
        self.sync_autoplay(now);
        outcome
    }

    /// Advance if the autoplay interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> TransitionOutcome {
        if !self.autoplay.poll(now) {
            return TransitionOutcome::Unchanged;
        }
        debug!("autoplay tick");
        self.handle(InputEvent::AutoplayTick, now)
    }

    /// Apply a (debounced) viewport width.
    ///
    /// Recomputes the visible count and clamps the index if the page count
    /// shrank past it.
    pub fn set_viewport_width(&mut self, width_px: u32, now: Instant) -> TransitionOutcome {
        self.viewport_width = width_px;
        let visible_count = self.settings.breakpoints.visible_count(width_px);
        if visible_count == self.visible_count {
            return TransitionOutcome::Unchanged;
        }
        debug!(
            width_px,
            from = self.visible_count,
            to = visible_count,
            "visible count changed"
        );
        self.visible_count = visible_count;
        let outcome = self
            .machine
            .set_page_count(page_count(self.items.len(), visible_count));
        self.sync_autoplay(now);
        outcome
    }

    /// Replace the item list. A different list resets the slide state; an
    /// identical list is ignored.
    pub fn set_items(&mut self, items: Vec<Item>, now: Instant) -> TransitionOutcome {
        if items == self.items {
            return TransitionOutcome::Unchanged;
        }
        info!(count = items.len(), "item list replaced");
        self.items = items;
        let outcome = self
            .machine
            .reset(page_count(self.items.len(), self.visible_count));
        // reset forgets the previous timer conditions
        self.autoplay.cancel();
        self.sync_autoplay(now);
        outcome
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.sync_autoplay(now);
        }
    }

    /// Keyboard focus moved into (`true`) or out of (`false`) the carousel.
    pub fn set_focus_within(&mut self, focused: bool) {
        self.arbitrator.set_focus_within(focused);
    }

    /// Pointer pressed inside the carousel at `pos` pixels.
    pub fn pointer_down(&mut self, pos: PointerPos, now: Instant) {
        self.swipe.press(pos, now);
    }

    /// Pointer released at `pos`. Returns the outcome of any recognized swipe.
    pub fn pointer_up(&mut self, pos: PointerPos, now: Instant) -> TransitionOutcome {
        match self.swipe.release(pos, now) {
            Some(direction) => self.handle(InputEvent::Swipe(direction), now),
            None => TransitionOutcome::Unchanged,
        }
    }

    /// Pointer left the window entirely: clear hover and drop any gesture.
    pub fn pointer_lost(&mut self, now: Instant) {
        self.swipe.cancel();
        self.set_hovered(false, now);
    }

    /// Tear down: stop the autoplay timer and drop any gesture in progress.
    ///
    /// The timer is never re-armed afterwards, so no tick can reach the
    /// machine after teardown.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay.cancel();
        self.swipe.cancel();
        debug!("carousel unmounted");
    }

    fn sync_autoplay(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        let conditions = AutoplayConditions {
            is_playing: self.machine.state().is_playing(),
            page_count: self.machine.page_count(),
            is_hovered: self.hovered,
        };
        self.autoplay.sync(conditions, now);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
