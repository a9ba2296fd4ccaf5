//! Chat data module
//!
//! This module owns the immutable chat data:
//! - `message` - Message structure and status icon derivation
//! - `chat` - Chat conversation records
//! - `contact` - Contact summaries projected from chats
//! - `fixture` - The embedded demo conversations
//! - `provider` - Data provider abstraction over the store

// Submodules
pub mod chat;
pub mod contact;
pub mod fixture;
pub mod message;
pub mod provider;

// Re-export commonly used types
pub use chat::Chat;
pub use contact::Contact;
pub use fixture::load_fixture;
pub use message::{Direction, Message, StatusIcon};
pub use provider::{ChatProvider, FixtureProvider};

// Re-export main functions
pub use contact::project_contacts;
