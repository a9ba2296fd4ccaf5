//! Data provider abstraction over the chat store
//!
//! The view never touches the chat store directly; it talks to a
//! `ChatProvider` through the bridge. The fixture store is the one
//! concrete implementation, but the trait leaves room for a real
//! backing store without touching the renderer.

use crate::Result;
use crate::store::chat::Chat;
use crate::store::contact::{Contact, project_contacts};
use crate::store::fixture::load_fixture;
use crate::store::message::Message;

/// Read-only access to contacts and message histories
pub trait ChatProvider: Send {
    /// Ordered contact directory, one entry per chat
    fn list_contacts(&self) -> Vec<Contact>;

    /// Messages for the chat whose nick matches exactly
    ///
    /// Case-sensitive, first match wins. `None` when no chat carries
    /// the nick.
    fn messages_for(&self, nick: &str) -> Option<&[Message]>;
}

/// Chat provider backed by the embedded fixture
pub struct FixtureProvider {
    chats: Vec<Chat>,
}

impl FixtureProvider {
    /// Load the embedded fixture into a provider
    pub fn new() -> Result<Self> {
        Ok(Self {
            chats: load_fixture()?,
        })
    }

    /// Build a provider over an explicit set of chats (used by tests)
    pub fn with_chats(chats: Vec<Chat>) -> Self {
        Self { chats }
    }
}

impl ChatProvider for FixtureProvider {
    fn list_contacts(&self) -> Vec<Contact> {
        project_contacts(&self.chats)
    }

    fn messages_for(&self, nick: &str) -> Option<&[Message]> {
        self.chats
            .iter()
            .find(|c| c.nick == nick)
            .map(|c| c.messages.as_slice())
    }
}
