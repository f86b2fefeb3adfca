//! Help overlay widget displaying keyboard and mouse shortcuts.
//!
//! Shows a centered modal overlay, toggled by '?' and dismissed by 'Esc' or '?'.

use super::styles::{FOCUSED_BORDER, MUTED_TEXT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_POPUP_WIDTH_PERCENT: u16 = 60;
const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(FOCUSED_BORDER),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let section = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Carousel (when focused)", section))];
    lines.extend(shortcut_lines(&[
        ("←", "Previous page"),
        ("→", "Next page"),
        ("Home", "First page"),
        ("End", "Last page"),
        ("Space / Enter", "Play or pause autoplay"),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Mouse", section)));
    lines.extend(shortcut_lines(&[
        ("Drag left/right", "Swipe to next/previous page"),
        ("Click < >", "Previous/next page"),
        ("Click a dot", "Jump to that page"),
        ("Hover", "Pause autoplay"),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Application", section)));
    lines.extend(shortcut_lines(&[
        ("Tab / Shift+Tab", "Move focus"),
        ("r", "Reload item file"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ]));

    lines
}

fn shortcut_lines(entries: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<17}", keys),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(*description),
            ])
        })
        .collect()
}
