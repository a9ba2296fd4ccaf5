//! The embedded demo conversations
//!
//! The chat store is a fixture compiled into the binary. It is parsed
//! once at startup and never mutated afterwards.

use crate::store::chat::Chat;
use crate::{Error, Result};

/// Demo conversations, embedded at compile time
const FIXTURE_JSON: &str = include_str!("fixture.json");

/// Load the embedded chat fixture
///
/// # Errors
/// Returns an error if the embedded JSON does not deserialize, which
/// would indicate a broken build rather than a runtime condition.
pub fn load_fixture() -> Result<Vec<Chat>> {
    let chats: Vec<Chat> = serde_json::from_str(FIXTURE_JSON)
        .map_err(|e| Error::Fixture(format!("embedded chat fixture is invalid: {}", e)))?;
    tracing::debug!(chats = chats.len(), "loaded embedded chat fixture");
    Ok(chats)
}
