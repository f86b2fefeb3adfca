//! Direction of the most recent slide transition.

/// Which way the last transition moved.
///
/// Renderers use this to pick the enter/exit side of a slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards higher page indices (or wrapping from last to first via `next`).
    #[default]
    Forward,
    /// Towards lower page indices (or wrapping from first to last via `previous`).
    Backward,
}

impl Direction {
    /// Arrow glyph for status display.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Forward => "▶",
            Direction::Backward => "◀",
        }
    }
}
