//! Pointer-drag swipe detection.

use super::arbitrator::SwipeDirection;
use std::time::{Duration, Instant};

/// Swipe recognition thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel in pixels.
    pub threshold_px: u32,
    /// Maximum press-to-release time.
    pub max_duration: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50,
            max_duration: Duration::from_millis(500),
        }
    }
}

/// Pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPos {
    /// Horizontal pixel offset.
    pub x: i64,
    /// Vertical pixel offset.
    pub y: i64,
}

impl PointerPos {
    /// Create a position.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Tracks one press/release pair and classifies it.
///
/// A gesture is a swipe when horizontal travel reaches the threshold, exceeds
/// vertical travel, and completes within the duration window.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    config: SwipeConfig,
    origin: Option<(PointerPos, Instant)>,
}

impl SwipeTracker {
    /// Create an idle tracker.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            origin: None,
        }
    }

    /// Pointer went down.
    pub fn press(&mut self, pos: PointerPos, now: Instant) {
        self.origin = Some((pos, now));
    }

    /// Pointer came up. Returns the recognized swipe, if any, and goes idle.
    pub fn release(&mut self, pos: PointerPos, now: Instant) -> Option<SwipeDirection> {
        let (start, pressed_at) = self.origin.take()?;

        if now.saturating_duration_since(pressed_at) > self.config.max_duration {
            return None;
        }

        let dx = pos.x - start.x;
        let dy = pos.y - start.y;
        if dx.unsigned_abs() < u64::from(self.config.threshold_px) || dx.abs() <= dy.abs() {
            return None;
        }

        if dx < 0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }

    /// Abandon a gesture in progress.
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Whether a press is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeConfig::default())
    }

    #[test]
    fn leftward_drag_past_threshold_is_swipe_left() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(200, 10), t0);
        let result = swipe.release(PointerPos::new(140, 12), t0 + Duration::from_millis(200));
        assert_eq!(result, Some(SwipeDirection::Left));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn rightward_drag_past_threshold_is_swipe_right() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(100, 10), t0);
        let result = swipe.release(PointerPos::new(150, 10), t0 + Duration::from_millis(100));
        assert_eq!(result, Some(SwipeDirection::Right));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(100, 10), t0);
        assert_eq!(swipe.release(PointerPos::new(70, 10), t0), None);
    }

    #[test]
    fn slow_drag_is_not_a_swipe() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(300, 10), t0);
        let result = swipe.release(PointerPos::new(100, 10), t0 + Duration::from_millis(501));
        assert_eq!(result, None);
    }

    #[test]
    fn vertical_dominant_drag_is_not_a_swipe() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(100, 0), t0);
        assert_eq!(swipe.release(PointerPos::new(40, 90), t0), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut swipe = tracker();
        assert_eq!(swipe.release(PointerPos::new(0, 0), Instant::now()), None);
    }

    #[test]
    fn cancel_drops_gesture() {
        let t0 = Instant::now();
        let mut swipe = tracker();
        swipe.press(PointerPos::new(200, 0), t0);
        swipe.cancel();
        assert_eq!(swipe.release(PointerPos::new(0, 0), t0), None);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let t0 = Instant::now();
        let mut swipe = SwipeTracker::new(SwipeConfig {
            threshold_px: 10,
            max_duration: Duration::from_millis(500),
        });
        swipe.press(PointerPos::new(50, 0), t0);
        assert_eq!(
            swipe.release(PointerPos::new(38, 0), t0),
            Some(SwipeDirection::Left)
        );
    }
}
