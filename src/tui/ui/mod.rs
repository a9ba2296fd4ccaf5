//! UI rendering module - pane-specific rendering functions
//!
//! This module contains the UI rendering logic organized by pane.
//! The layout is a fixed-width contact sidebar next to the chat zone,
//! with the update prompt drawn as a popup on top when active.

mod chat_view;
mod contact_list;
mod helpers;
mod update_prompt;

use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

// Re-export render functions
pub use chat_view::render_chat_view;
pub use contact_list::render_contact_list;
pub use update_prompt::render_update_prompt;

// Re-export helper functions
pub use helpers::{preview_text, relative_time};

/// Sidebar width in terminal cells
const SIDEBAR_WIDTH: u16 = 34;

/// Main UI rendering function - lays out the panes and dispatches
pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
        .split(size);

    render_contact_list(f, app, chunks[0]);
    render_chat_view(f, app, chunks[1]);

    if app.update_prompt_visible() {
        render_update_prompt(f, app, size);
    }
}
