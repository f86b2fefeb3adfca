//! The slide: one page of items laid out in equal columns.

use super::styles::{self, ITEM_NAME, MUTED_TEXT};
use crate::model::Item;
use crate::state::Carousel;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of the slide when there are no items.
pub const EMPTY_MESSAGE: &str = "No technologies to display";

/// Render the current page inside a bordered block.
///
/// Columns are sized by the visible count, not by the items on the page, so
/// a short last page keeps the same column widths as the others.
pub fn render_slide(frame: &mut Frame, area: Rect, carousel: &Carousel, focused: bool) {
    let state = carousel.state();
    let mut block = Block::default()
        .title(" Technologies ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));
    if carousel.has_controls() {
        block = block.title_bottom(
            Line::from(format!(" {} ", state.direction().arrow())).alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let page = carousel.current_page();
    if page.is_empty() {
        render_empty(frame, inner);
        return;
    }

    let column_count = carousel.visible_count().max(1);
    let columns = Layout::horizontal(
        (0..column_count).map(|_| Constraint::Ratio(1, column_count as u32)),
    )
    .split(inner);

    for (item, column) in page.iter().zip(columns.iter()) {
        render_item(frame, *column, item);
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let top = area.height / 2;
    let message_area = Rect::new(area.x, area.y + top, area.width, area.height.min(1));
    frame.render_widget(
        Paragraph::new(Span::styled(EMPTY_MESSAGE, MUTED_TEXT)).alignment(Alignment::Center),
        message_area,
    );
}

fn render_item(frame: &mut Frame, area: Rect, item: &Item) {
    let width = usize::from(area.width.saturating_sub(2));
    let top_padding = area.height.saturating_sub(3) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::default()).collect();
    lines.push(Line::from(Span::styled(
        truncate_to_width(&format!("[{}]", item.icon()), width),
        MUTED_TEXT,
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        truncate_to_width(item.display_name(), width),
        ITEM_NAME,
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
