//! Shared styles for the carousel screen.

use ratatui::style::{Color, Modifier, Style};

/// Accent color for the focused border, the active dot and the progress bar.
pub const ACCENT: Color = Color::Cyan;

/// Border of the region that holds keyboard focus.
pub const FOCUSED_BORDER: Style = Style::new().fg(ACCENT);

/// Border of a region without focus.
pub const UNFOCUSED_BORDER: Style = Style::new().fg(Color::DarkGray);

/// De-emphasized text (hints, icon keys, inactive dots).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Item names.
pub const ITEM_NAME: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Dot for the current page.
pub const ACTIVE_DOT: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

/// Previous/next buttons and the play toggle.
pub const BUTTON: Style = Style::new().fg(Color::Yellow);

/// Section title in the header.
pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border style for a region, by focus.
pub fn border_style(focused: bool) -> Style {
    if focused {
        FOCUSED_BORDER
    } else {
        UNFOCUSED_BORDER
    }
}
