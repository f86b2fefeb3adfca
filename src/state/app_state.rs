//! Application state and transitions.
//!
//! AppState is the root state type for the terminal front-end. It owns one
//! [`Carousel`] and the app-level UI flags around it.

use crate::state::carousel::Carousel;

// ===== FocusRegion =====

/// Which region holds keyboard focus.
///
/// Carousel shortcuts only act while focus is [`FocusRegion::Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    /// The section header, outside the carousel.
    #[default]
    Header,
    /// The carousel region.
    Carousel,
}

impl FocusRegion {
    /// The other region.
    pub fn cycled(self) -> Self {
        match self {
            FocusRegion::Header => FocusRegion::Carousel,
            FocusRegion::Carousel => FocusRegion::Header,
        }
    }
}

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// - **Focus**: Header ⇄ Carousel (via `cycle_focus`); mirrored into the
///   carousel's arbitrator so keyboard scoping has a single source of truth
/// - **Help**: hidden ⇄ visible (via `toggle_help`)
#[derive(Debug, Clone)]
pub struct AppState {
    carousel: Carousel,

    /// Which region currently has keyboard focus.
    focus: FocusRegion,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Wrap a mounted carousel. Focus starts in the carousel so the
    /// keyboard works without an initial Tab.
    pub fn new(carousel: Carousel) -> Self {
        let mut state = Self {
            carousel,
            focus: FocusRegion::Header,
            help_visible: false,
        };
        state.set_focus(FocusRegion::Carousel);
        state
    }

    /// The carousel.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// The carousel, mutably.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Current focus region.
    pub fn focus(&self) -> FocusRegion {
        self.focus
    }

    /// Move focus to `region`.
    pub fn set_focus(&mut self, region: FocusRegion) {
        self.focus = region;
        self.carousel
            .set_focus_within(region == FocusRegion::Carousel);
    }

    /// Move focus to the other region.
    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.cycled());
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_technologies;
    use crate::state::carousel::CarouselSettings;
    use std::time::Instant;

    fn app() -> AppState {
        AppState::new(Carousel::new(
            default_technologies(),
            1280,
            CarouselSettings::default(),
            Instant::now(),
        ))
    }

    #[test]
    fn starts_with_carousel_focused() {
        let state = app();
        assert_eq!(state.focus(), FocusRegion::Carousel);
        assert!(state.carousel().has_focus());
        assert!(!state.help_visible);
    }

    #[test]
    fn cycle_focus_mirrors_into_carousel() {
        let mut state = app();
        state.cycle_focus();
        assert_eq!(state.focus(), FocusRegion::Header);
        assert!(!state.carousel().has_focus());

        state.cycle_focus();
        assert_eq!(state.focus(), FocusRegion::Carousel);
        assert!(state.carousel().has_focus());
    }

    #[test]
    fn toggle_help_flips_visibility() {
        let mut state = app();
        state.toggle_help();
        assert!(state.help_visible);
        state.toggle_help();
        assert!(!state.help_visible);
    }
}
