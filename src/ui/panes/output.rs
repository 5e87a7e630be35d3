//! Output pane: the demo's trace, revealed up to the current step

use super::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Render the captured output visible at the current step.
///
/// A `scroll_offset` of `usize::MAX` means "follow the bottom"; it is clamped
/// to the last page, which keeps the newest line in view while stepping.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
