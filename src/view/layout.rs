//! Screen layout.
//!
//! Pure geometry: splits the frame into rows and places the carousel
//! controls. The same [`ControlLayout`] is used to render the controls and to
//! hit-test the pointer, so what is drawn is what is clickable.

use crate::view_state::ControlLayout;
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the previous/next buttons, in columns.
pub const NAV_BUTTON_WIDTH: u16 = 3;

/// Width reserved for the play/pause toggle, in columns.
pub const PLAY_PAUSE_WIDTH: u16 = 10;

/// Horizontal distance between pagination dots, in columns.
pub const DOT_SPACING: u16 = 2;

/// Rows of the carousel screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Section header.
    pub header: Rect,
    /// Progress bar.
    pub progress: Rect,
    /// The slide itself.
    pub slide: Rect,
    /// Previous button, dots, next button.
    pub controls: Rect,
    /// Play toggle and page counter.
    pub status: Rect,
    /// Navigation hint.
    pub footer: Rect,
}

impl ScreenAreas {
    /// Everything that belongs to the carousel (hover and swipe surface).
    pub fn carousel_region(&self) -> Rect {
        self.progress.union(self.status)
    }
}

/// Split the frame into its rows.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Length(1), // progress
        Constraint::Min(5),    // slide
        Constraint::Length(1), // controls
        Constraint::Length(1), // status
        Constraint::Length(1), // footer
    ])
    .split(area);

    ScreenAreas {
        header: rows[0],
        progress: rows[1],
        slide: rows[2],
        controls: rows[3],
        status: rows[4],
        footer: rows[5],
    }
}

/// Place the carousel controls.
///
/// With a single page only the region is set; every control rect stays
/// empty so nothing is drawn or clickable.
pub fn control_layout(areas: &ScreenAreas, page_count: usize) -> ControlLayout {
    let region = areas.carousel_region();
    if page_count <= 1 {
        return ControlLayout {
            region,
            ..ControlLayout::default()
        };
    }

    let row = areas.controls;
    let button_width = NAV_BUTTON_WIDTH.min(row.width);
    let previous = Rect::new(row.x, row.y, button_width, 1);
    let next = Rect::new(
        row.x + row.width.saturating_sub(button_width),
        row.y,
        button_width,
        1,
    );

    // Dots live between the buttons; the ones that do not fit are zero-sized.
    let dot_track = Rect::new(
        row.x + button_width,
        row.y,
        row.width.saturating_sub(button_width * 2),
        1,
    );
    let dots_width = u16::try_from(page_count * DOT_SPACING as usize - 1).unwrap_or(u16::MAX);
    let first_dot = dot_track.x + dot_track.width.saturating_sub(dots_width) / 2;
    let dots = (0..page_count)
        .map(|page| {
            let offset = u16::try_from(page).unwrap_or(u16::MAX).saturating_mul(DOT_SPACING);
            Rect::new(first_dot.saturating_add(offset), row.y, 1, 1).intersection(dot_track)
        })
        .collect();

    let status = areas.status;
    let toggle_width = PLAY_PAUSE_WIDTH.min(status.width);
    let play_pause = Rect::new(
        status.x + (status.width - toggle_width) / 2,
        status.y,
        toggle_width,
        1,
    );

    ControlLayout {
        region,
        previous,
        next,
        dots,
        play_pause,
    }
}
