//! Contact summaries projected from chats
//!
//! A `Contact` is the sidebar view of a `Chat`: the scalar display
//! fields plus the last message for the preview line. Projection is a
//! pure, order-preserving map over the chat store.

use crate::store::chat::Chat;
use crate::store::message::Message;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Lightweight summary of a chat for list display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Nickname, same key as the source chat
    pub nick: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Timestamp of the most recent message
    pub last_message_at: DateTime<FixedOffset>,
    /// Final message of the source chat; `None` when the chat is empty
    #[serde(default)]
    pub last_message: Option<Message>,
}

impl Contact {
    /// Build a contact summary from a chat record
    pub fn from_chat(chat: &Chat) -> Self {
        Self {
            nick: chat.nick.clone(),
            name: chat.name.clone(),
            avatar: chat.avatar.clone(),
            last_message_at: chat.last_message_at,
            last_message: chat.last_message().cloned(),
        }
    }
}

/// Project the full chat store into an ordered contact directory
///
/// One contact per chat, same order. A chat with no messages yields a
/// contact with no `last_message`; the renderer shows no preview for it.
pub fn project_contacts(chats: &[Chat]) -> Vec<Contact> {
    chats.iter().map(Contact::from_chat).collect()
}
