//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Carousel navigation (only honored while focus is inside the carousel)
    /// Go to the previous page. Default: ←
    Previous,
    /// Go to the next page. Default: →
    Next,
    /// Toggle autoplay. Default: Space/Enter
    TogglePlay,
    /// Jump to the first page. Default: Home
    First,
    /// Jump to the last page. Default: End
    Last,

    // Application
    /// Move keyboard focus between the header and the carousel. Default: Tab/Shift+Tab
    CycleFocus,
    /// Show or hide the help overlay. Default: ?
    Help,
    /// Re-read the item source. Default: r
    Reload,
    /// Exit the application. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action targets the carousel and is therefore focus-scoped.
    pub fn is_carousel_action(self) -> bool {
        matches!(
            self,
            KeyAction::Previous
                | KeyAction::Next
                | KeyAction::TogglePlay
                | KeyAction::First
                | KeyAction::Last
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_actions_are_carousel_scoped() {
        for action in [
            KeyAction::Previous,
            KeyAction::Next,
            KeyAction::TogglePlay,
            KeyAction::First,
            KeyAction::Last,
        ] {
            assert!(action.is_carousel_action(), "{action:?} should be scoped");
        }
    }

    #[test]
    fn application_actions_are_not_carousel_scoped() {
        for action in [
            KeyAction::CycleFocus,
            KeyAction::Help,
            KeyAction::Reload,
            KeyAction::Quit,
        ] {
            assert!(!action.is_carousel_action(), "{action:?} should be global");
        }
    }
}
