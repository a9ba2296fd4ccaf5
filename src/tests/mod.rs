// Test modules for Burble
// Each module covers the corresponding source area

mod store_tests;
mod update_tests;

use crate::store::{Direction, Message};
use chrono::DateTime;

/// Build a message with the given body fields; timestamp fixed
pub(crate) fn message(
    id: &str,
    text: Option<&str>,
    media: Option<&str>,
    from_me: bool,
    is_read: bool,
) -> Message {
    Message {
        id: id.to_string(),
        text: text.map(str::to_string),
        sent_at: DateTime::parse_from_rfc3339("2026-01-20T12:00:00-04:00").unwrap(),
        is_read,
        direction: if from_me {
            Direction::Sent
        } else {
            Direction::Received
        },
        from_me,
        media: media.map(str::to_string),
    }
}
