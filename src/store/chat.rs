//! Chat conversation records

use crate::store::message::Message;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A contact's full conversation plus display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Nickname, the primary key across all chats
    pub nick: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Timestamp of the most recent message
    pub last_message_at: DateTime<FixedOffset>,
    /// Messages in insertion (chronological) order
    pub messages: Vec<Message>,
}

impl Chat {
    /// The final message of the conversation, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
