//! Header, progress bar, navigation controls, status row and footer.

use super::slide::truncate_to_width;
use super::styles::{self, ACCENT, ACTIVE_DOT, BUTTON, MUTED_TEXT, TITLE};
use crate::state::Carousel;
use crate::view_state::ControlLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

/// Hint shown under the carousel.
pub const NAVIGATION_HINT: &str = "Swipe or use arrow keys to navigate";

/// Play/pause toggle label for the current autoplay flag.
pub fn play_pause_label(is_playing: bool) -> &'static str {
    if is_playing {
        "[⏸ Pause]"
    } else {
        "[▶ Play]"
    }
}

/// Section header with title and subtitle.
pub fn render_header(frame: &mut Frame, area: Rect, focused: bool) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Technology Stack", TITLE),
        Span::styled("  Tools we build with", MUTED_TEXT),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(focused)),
    );
    frame.render_widget(header, area);
}

/// Progress bar at `(index + 1) / page_count`.
pub fn render_progress(frame: &mut Frame, area: Rect, carousel: &Carousel) {
    let gauge = LineGauge::default()
        .ratio(carousel.progress().clamp(0.0, 1.0))
        .label("")
        .filled_style(Style::new().fg(ACCENT))
        .unfilled_style(MUTED_TEXT)
        .line_set(symbols::line::THICK);
    frame.render_widget(gauge, area);
}

/// Previous button, one dot per page, next button.
pub fn render_controls(frame: &mut Frame, layout: &ControlLayout, carousel: &Carousel) {
    if !carousel.has_controls() {
        return;
    }
    let current = carousel.state().current_index();

    render_button(frame, layout.previous, " < ");
    render_button(frame, layout.next, " > ");

    for (page, dot) in layout.dots.iter().enumerate() {
        if dot.width == 0 {
            continue;
        }
        let span = if page == current {
            Span::styled("●", ACTIVE_DOT)
        } else {
            Span::styled("○", MUTED_TEXT)
        };
        frame.render_widget(Paragraph::new(span), *dot);
    }
}

/// Viewport class on the left, play toggle centered, counter on the right.
pub fn render_status(frame: &mut Frame, area: Rect, layout: &ControlLayout, carousel: &Carousel) {
    let class = format!(
        " {} · {} per page",
        carousel.viewport_class().label(),
        carousel.visible_count()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&class, usize::from(area.width / 3)),
            MUTED_TEXT,
        )),
        area,
    );

    if !carousel.has_controls() {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            play_pause_label(carousel.state().is_playing()),
            BUTTON,
        ))
        .alignment(Alignment::Center),
        layout.play_pause,
    );

    frame.render_widget(
        Paragraph::new(format!("{} ", carousel.counter_label())).alignment(Alignment::Right),
        Rect::new(
            area.x + area.width - area.width / 3,
            area.y,
            area.width / 3,
            area.height,
        ),
    );
}

/// Navigation hint and global shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(NAVIGATION_HINT, MUTED_TEXT),
        Span::styled("  ·  ? help  ·  q quit", MUTED_TEXT),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &'static str) {
    if area.width == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(Span::styled(label, BUTTON)), area);
}
