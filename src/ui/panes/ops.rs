//! Operations pane: the recorded steps, current one highlighted

use super::{border_style, clamp_scroll};
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Render the list of recorded operations
pub fn render_operations_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    current_step: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Operations ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if snapshots.is_empty() {
        let paragraph = Paragraph::new("(no operations recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current step inside the visible window
    if current_step < *scroll_offset {
        *scroll_offset = current_step;
    } else if current_step >= *scroll_offset + visible_height {
        *scroll_offset = current_step + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, snapshots.len(), visible_height);

    let items: Vec<ListItem> = snapshots
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, snap)| {
            let text = format!("{:>4}  {}", idx + 1, snap.operation);
            let style = if idx == current_step {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else if idx < current_step {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
