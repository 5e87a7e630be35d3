//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`ops`]: recorded operations, with the current step highlighted
//! - [`state`]: the structure state captured by the current snapshot
//! - [`output`]: the demo's trace output up to the current step
//! - [`status`]: status bar with keybindings and replay position
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area, the data to show, focus state, and its scroll offset.

pub mod ops;
pub mod output;
pub mod state;
pub mod status;

// Re-export render functions for convenience
pub use ops::render_operations_pane;
pub use output::render_output_pane;
pub use state::render_state_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane: highlighted when focused
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the visible window stays inside the content
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
