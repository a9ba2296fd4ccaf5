//! Pane state structures for the TUI

/// Contact sidebar state
#[derive(Debug)]
pub struct ContactPaneState {
    /// Cursor position within the contact list
    pub cursor: usize,
    /// Status message shown under the list
    pub status_message: Option<String>,
}

impl ContactPaneState {
    /// Create new sidebar state
    pub fn new() -> Self {
        Self {
            cursor: 0,
            status_message: None,
        }
    }

    /// Move cursor to the next contact
    pub fn next(&mut self, contact_count: usize) {
        if contact_count > 0 {
            self.cursor = (self.cursor + 1) % contact_count;
        }
    }

    /// Move cursor to the previous contact
    pub fn previous(&mut self, contact_count: usize) {
        if contact_count > 0 {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else {
                self.cursor = contact_count - 1;
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for ContactPaneState {
    fn default() -> Self {
        Self::new()
    }
}

/// Conversation pane state for the active selection
#[derive(Debug)]
pub struct ChatPaneState {
    /// Nick of the selected contact
    pub nick: String,
    /// Scroll offset into the message history
    pub scroll_offset: usize,
}

impl ChatPaneState {
    /// Create pane state for a freshly selected contact
    pub fn new(nick: String) -> Self {
        Self {
            nick,
            scroll_offset: 0,
        }
    }

    /// Scroll message history up
    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    /// Scroll message history down
    pub fn scroll_down(&mut self, max_offset: usize) {
        if self.scroll_offset < max_offset {
            self.scroll_offset += 1;
        }
    }
}
