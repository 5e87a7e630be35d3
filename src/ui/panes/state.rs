//! State pane: the structure as it looked after the current operation

use super::{border_style, clamp_scroll};
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Render the structure state recorded in the current snapshot
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no state)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, snapshot.state.len(), visible_height);

    let items: Vec<ListItem> = snapshot
        .state
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            let style = if line.ends_with("(empty)") || line.ends_with("(no frames)") {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.success)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
