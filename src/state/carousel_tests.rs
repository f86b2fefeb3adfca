//! Tests for the carousel composition root.
//!
//! Tests verify the wiring between viewport, partitioner, machine, arbitrator,
//! swipe tracker and autoplay timer.

use super::*;
use crate::model::{default_technologies, Direction, KeyAction};
use crate::state::arbitrator::SwipeDirection;
use crate::view_state::ControlHit;

// ===== Test Helpers =====

const XL: u32 = 1280;
const MOBILE: u32 = 320;
const INTERVAL: Duration = Duration::from_millis(4000);

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("tech-{i}"), format!("icon-{i}")))
        .collect()
}

fn mount(n: usize, width: u32, now: Instant) -> Carousel {
    Carousel::new(items(n), width, CarouselSettings::default(), now)
}

// ===== Mounting =====

#[test]
fn mounts_at_first_page_playing_with_timer_armed() {
    let t0 = Instant::now();
    let carousel = Carousel::new(default_technologies(), XL, CarouselSettings::default(), t0);

    assert_eq!(carousel.visible_count(), 6);
    assert_eq!(carousel.page_count(), 3);
    assert_eq!(carousel.state().current_index(), 0);
    assert!(carousel.state().is_playing());
    assert_eq!(carousel.next_deadline(), Some(t0 + INTERVAL));
}

#[test]
fn start_paused_setting_disables_autoplay() {
    let t0 = Instant::now();
    let settings = CarouselSettings {
        start_playing: false,
        ..CarouselSettings::default()
    };
    let carousel = Carousel::new(items(13), XL, settings, t0);
    assert!(!carousel.state().is_playing());
    assert!(!carousel.is_autoplay_running());
}

#[test]
fn pages_follow_thirteen_technologies_at_xl() {
    let carousel = Carousel::new(
        default_technologies(),
        XL,
        CarouselSettings::default(),
        Instant::now(),
    );
    let sizes: Vec<usize> = carousel.pages().iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![6, 6, 1]);
    assert_eq!(carousel.current_page()[0].name(), "HTML5");
}

#[test]
fn empty_items_have_one_empty_page_and_no_controls() {
    let carousel = mount(0, XL, Instant::now());
    assert_eq!(carousel.page_count(), 1);
    assert!(carousel.current_page().is_empty());
    assert!(!carousel.has_controls());
    assert!(!carousel.is_autoplay_running());
}

// ===== Derived read side =====

#[test]
fn progress_and_counter_track_index() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    assert_eq!(carousel.counter_label(), "1 of 3");
    assert!((carousel.progress() - 1.0 / 3.0).abs() < f64::EPSILON);

    carousel.dispatch(TransitionRequest::GoTo(2), t0);
    assert_eq!(carousel.counter_label(), "3 of 3");
    assert!((carousel.progress() - 1.0).abs() < f64::EPSILON);
}

// ===== Autoplay =====

#[test]
fn autoplay_advances_and_wraps_forward() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);

    let mut seen = vec![carousel.state().current_index()];
    for tick in 1..=3u32 {
        let outcome = carousel.tick(t0 + INTERVAL * tick);
        assert!(outcome.is_animated());
        assert_eq!(carousel.state().direction(), Direction::Forward);
        seen.push(carousel.state().current_index());
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);
}

#[test]
fn tick_before_deadline_does_nothing() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    assert_eq!(
        carousel.tick(t0 + Duration::from_millis(3999)),
        TransitionOutcome::Unchanged
    );
    assert_eq!(carousel.state().current_index(), 0);
}

#[test]
fn hover_pauses_and_leave_restarts_countdown() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);

    carousel.set_hovered(true, t0 + Duration::from_millis(1000));
    assert!(!carousel.is_autoplay_running());
    assert_eq!(
        carousel.tick(t0 + INTERVAL * 3),
        TransitionOutcome::Unchanged
    );
    assert_eq!(carousel.state().current_index(), 0);

    let left_at = t0 + INTERVAL * 3;
    carousel.set_hovered(false, left_at);
    assert_eq!(carousel.next_deadline(), Some(left_at + INTERVAL));
    carousel.tick(left_at + INTERVAL);
    assert_eq!(carousel.state().current_index(), 1);
}

#[test]
fn losing_the_pointer_clears_hover_and_gesture() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.set_hovered(true, t0);
    carousel.pointer_down(PointerPos::new(600, 100), t0);

    let lost_at = t0 + INTERVAL * 2;
    carousel.pointer_lost(lost_at);

    assert!(!carousel.is_hovered());
    assert_eq!(carousel.next_deadline(), Some(lost_at + INTERVAL));
    assert_eq!(
        carousel.pointer_up(PointerPos::new(100, 100), lost_at),
        TransitionOutcome::Unchanged
    );
    assert_eq!(carousel.state().current_index(), 0);
}

#[test]
fn pausing_stops_timer_and_resuming_rearms() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.dispatch(TransitionRequest::SetPlaying(false), t0);
    assert!(!carousel.is_autoplay_running());

    let resume = t0 + Duration::from_millis(500);
    carousel.dispatch(TransitionRequest::SetPlaying(true), resume);
    assert_eq!(carousel.next_deadline(), Some(resume + INTERVAL));
}

#[test]
fn manual_navigation_keeps_timer_cadence() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.dispatch(TransitionRequest::Next, t0 + Duration::from_millis(1000));
    assert_eq!(carousel.next_deadline(), Some(t0 + INTERVAL));
}

#[test]
fn single_page_never_autoplays_but_toggles() {
    let t0 = Instant::now();
    let mut carousel = mount(4, XL, t0);
    assert_eq!(carousel.page_count(), 1);
    assert!(!carousel.is_autoplay_running());
    assert_eq!(carousel.tick(t0 + INTERVAL * 2), TransitionOutcome::Unchanged);

    carousel.set_focus_within(true);
    let outcome = carousel.handle(InputEvent::Key(KeyAction::TogglePlay), t0);
    assert_eq!(outcome, TransitionOutcome::PlayingChanged(false));
}

// ===== Viewport =====

#[test]
fn narrowing_viewport_grows_page_count_and_keeps_index() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.dispatch(TransitionRequest::GoTo(1), t0);

    let outcome = carousel.set_viewport_width(MOBILE, t0);

    assert_eq!(outcome, TransitionOutcome::Unchanged);
    assert_eq!(carousel.visible_count(), 2);
    assert_eq!(carousel.page_count(), 7);
    assert_eq!(carousel.state().current_index(), 1);
}

#[test]
fn widening_viewport_clamps_index_silently() {
    let t0 = Instant::now();
    let mut carousel = mount(13, MOBILE, t0);
    carousel.dispatch(TransitionRequest::GoTo(6), t0);
    let direction = carousel.state().direction();

    let outcome = carousel.set_viewport_width(XL, t0);

    assert_eq!(outcome, TransitionOutcome::Clamped { from: 6, to: 2 });
    assert_eq!(carousel.state().current_index(), 2);
    assert_eq!(carousel.state().direction(), direction);
}

#[test]
fn width_within_same_class_is_ignored() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    assert_eq!(
        carousel.set_viewport_width(1900, t0),
        TransitionOutcome::Unchanged
    );
    assert_eq!(carousel.viewport_width(), 1900);
}

#[test]
fn page_count_change_restarts_autoplay() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    let resized_at = t0 + Duration::from_millis(3000);
    carousel.set_viewport_width(MOBILE, resized_at);
    assert_eq!(carousel.next_deadline(), Some(resized_at + INTERVAL));
}

#[test]
fn widening_to_single_page_stops_autoplay() {
    let t0 = Instant::now();
    let mut carousel = mount(5, MOBILE, t0);
    assert!(carousel.is_autoplay_running());
    carousel.set_viewport_width(XL, t0);
    assert_eq!(carousel.page_count(), 1);
    assert!(!carousel.is_autoplay_running());
}

// ===== Items =====

#[test]
fn new_item_list_resets_state() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.dispatch(TransitionRequest::GoTo(2), t0);
    carousel.dispatch(TransitionRequest::SetPlaying(false), t0);

    let outcome = carousel.set_items(items(20), t0);

    assert_eq!(outcome, TransitionOutcome::Reset);
    assert_eq!(carousel.state().current_index(), 0);
    assert!(carousel.state().is_playing());
    assert_eq!(carousel.page_count(), 4);
    assert!(carousel.is_autoplay_running());
}

#[test]
fn identical_item_list_is_ignored() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.dispatch(TransitionRequest::GoTo(2), t0);
    assert_eq!(carousel.set_items(items(13), t0), TransitionOutcome::Unchanged);
    assert_eq!(carousel.state().current_index(), 2);
}

// ===== Input sources =====

#[test]
fn keyboard_requires_focus() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);

    carousel.handle(InputEvent::Key(KeyAction::Next), t0);
    assert_eq!(carousel.state().current_index(), 0);

    carousel.set_focus_within(true);
    carousel.handle(InputEvent::Key(KeyAction::Next), t0);
    assert_eq!(carousel.state().current_index(), 1);

    carousel.handle(InputEvent::Key(KeyAction::Last), t0);
    assert_eq!(carousel.state().current_index(), 2);
    carousel.handle(InputEvent::Key(KeyAction::First), t0);
    assert_eq!(carousel.state().current_index(), 0);
    assert_eq!(carousel.state().direction(), Direction::Backward);
}

#[test]
fn dot_click_jumps_directly() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    let outcome = carousel.handle(InputEvent::Control(ControlHit::Dot(2)), t0);
    assert_eq!(
        outcome,
        TransitionOutcome::Moved {
            from: 0,
            to: 2,
            direction: Direction::Forward
        }
    );
}

#[test]
fn swipe_gesture_navigates() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);

    carousel.pointer_down(PointerPos::new(400, 40), t0);
    let outcome = carousel.pointer_up(PointerPos::new(300, 40), t0 + Duration::from_millis(150));
    assert!(outcome.is_animated());
    assert_eq!(carousel.state().current_index(), 1);

    carousel.pointer_down(PointerPos::new(300, 40), t0);
    carousel.pointer_up(PointerPos::new(400, 40), t0 + Duration::from_millis(150));
    assert_eq!(carousel.state().current_index(), 0);
    assert_eq!(carousel.state().direction(), Direction::Backward);
}

#[test]
fn swipe_event_maps_like_buttons() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.handle(InputEvent::Swipe(SwipeDirection::Right), t0);
    assert_eq!(carousel.state().current_index(), 2);
    assert_eq!(carousel.state().direction(), Direction::Backward);
}

// ===== Teardown =====

#[test]
fn unmount_stops_all_future_ticks() {
    let t0 = Instant::now();
    let mut carousel = mount(13, XL, t0);
    carousel.unmount();
    assert!(!carousel.is_autoplay_running());

    carousel.set_hovered(true, t0);
    carousel.set_hovered(false, t0);
    assert!(!carousel.is_autoplay_running());
    assert_eq!(carousel.tick(t0 + INTERVAL * 4), TransitionOutcome::Unchanged);
    assert_eq!(carousel.state().current_index(), 0);
}
