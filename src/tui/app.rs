//! Main TUI application state and logic

use crate::bridge::{BridgeEvent, UiRequest};
use crate::store::{Contact, Message};
use crate::tui::screens::{ChatPaneState, ContactPaneState};
use crate::update::UpdateInfo;

/// Update flow as seen by the view
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    /// No update announced
    None,
    /// An update is available for download
    Available(UpdateInfo),
    /// Download in progress
    Downloading {
        /// Completed portion, 0..100
        percent: u8,
    },
    /// Downloaded and ready to install
    Ready(UpdateInfo),
}

/// Application state
///
/// Owns only the transient view state: the contact directory cache,
/// the single active selection, and the messages delivered for it.
/// The chat data itself lives on the far side of the bridge.
pub struct App {
    /// Contact directory; `None` until the bridge delivers it
    pub contacts: Option<Vec<Contact>>,
    /// Nick of the active selection, at most one at a time
    pub selected_nick: Option<String>,
    /// Messages delivered for the active selection
    pub messages: Vec<Message>,
    /// Sidebar state
    pub contact_pane: ContactPaneState,
    /// Conversation pane state (present only while a chat is open)
    pub chat_pane: Option<ChatPaneState>,
    /// Update flow status
    pub update: UpdateStatus,
    /// Whether the user dismissed the current update prompt
    pub update_prompt_dismissed: bool,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    /// Create new application in the "no chat selected" startup state
    pub fn new() -> Self {
        Self {
            contacts: None,
            selected_nick: None,
            messages: Vec::new(),
            contact_pane: ContactPaneState::new(),
            chat_pane: None,
            update: UpdateStatus::None,
            update_prompt_dismissed: false,
            should_quit: false,
        }
    }

    /// Apply one event delivered by the bridge
    pub fn apply_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::Contacts(contacts) => {
                tracing::debug!(count = contacts.len(), "contact directory arrived");
                self.contacts = Some(contacts);
            }
            BridgeEvent::UserMessages(messages) => {
                // No correlation id on the channel: the delivery is taken
                // to answer the most recent selection. A delivery landing
                // after the selection was cleared is dropped.
                if self.selected_nick.is_some() {
                    self.messages = messages;
                }
            }
            BridgeEvent::ContactNotFound(nick) => {
                self.messages.clear();
                self.contact_pane
                    .set_status(format!("No chat found for '{}'", nick));
            }
            BridgeEvent::UpdateAvailable(info) => {
                self.update = UpdateStatus::Available(info);
                self.update_prompt_dismissed = false;
            }
            BridgeEvent::UpdateDownloading { percent } => {
                self.update = UpdateStatus::Downloading { percent };
            }
            BridgeEvent::UpdateReady(info) => {
                self.update = UpdateStatus::Ready(info);
                self.update_prompt_dismissed = false;
            }
        }
    }

    /// Number of contacts in the directory (0 while loading)
    pub fn contact_count(&self) -> usize {
        self.contacts.as_ref().map(Vec::len).unwrap_or(0)
    }

    /// The contact record for the active selection
    pub fn selected_contact(&self) -> Option<&Contact> {
        let nick = self.selected_nick.as_deref()?;
        self.contacts
            .as_ref()?
            .iter()
            .find(|c| c.nick == nick)
    }

    /// Whether the given nick is the active selection
    pub fn is_selected(&self, nick: &str) -> bool {
        self.selected_nick.as_deref() == Some(nick)
    }

    /// Select the contact under the sidebar cursor
    ///
    /// Returns the request to send over the bridge. A no-op while the
    /// directory has not arrived yet.
    pub fn select_under_cursor(&mut self) -> Option<UiRequest> {
        let contacts = self.contacts.as_ref()?;
        let nick = contacts.get(self.contact_pane.cursor)?.nick.clone();
        Some(self.select_nick(nick))
    }

    /// Select a contact by nick
    ///
    /// Records it as the single active selection and clears any
    /// previously rendered messages; the returned request asks the
    /// bridge for the contact's history.
    pub fn select_nick(&mut self, nick: String) -> UiRequest {
        self.selected_nick = Some(nick.clone());
        self.messages.clear();
        self.chat_pane = Some(ChatPaneState::new(nick.clone()));
        self.contact_pane.clear_status();
        UiRequest::ContactSelected(nick)
    }

    /// Clear the selection and return to the placeholder state
    ///
    /// This is also the startup state, and can be re-entered after any
    /// selection.
    pub fn clear_selection(&mut self) {
        self.selected_nick = None;
        self.messages.clear();
        self.chat_pane = None;
        self.contact_pane.clear_status();
    }

    /// Move the sidebar cursor to the next contact
    pub fn next_contact(&mut self) {
        let count = self.contact_count();
        self.contact_pane.next(count);
    }

    /// Move the sidebar cursor to the previous contact
    pub fn previous_contact(&mut self) {
        let count = self.contact_count();
        self.contact_pane.previous(count);
    }

    /// Whether the update prompt popup should be on screen
    pub fn update_prompt_visible(&self) -> bool {
        if self.update_prompt_dismissed {
            return false;
        }
        matches!(
            self.update,
            UpdateStatus::Available(_) | UpdateStatus::Downloading { .. } | UpdateStatus::Ready(_)
        )
    }

    /// Dismiss the update prompt until the next status change
    pub fn dismiss_update_prompt(&mut self) {
        self.update_prompt_dismissed = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
