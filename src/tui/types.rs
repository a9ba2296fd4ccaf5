//! Core view-model types for bubble rendering

use crate::store::Message;

/// Horizontal alignment of a rendered bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlign {
    /// Outgoing message, right-aligned
    Sent,
    /// Incoming message, left-aligned
    Received,
}

impl BubbleAlign {
    /// Alignment for a message, keyed off `from_me` alone
    pub fn of(message: &Message) -> Self {
        if message.from_me {
            Self::Sent
        } else {
            Self::Received
        }
    }
}

/// One piece of a bubble body, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySegment {
    /// Inline image marker for a media URL
    Image(String),
    /// Plain text
    Text(String),
    /// Clickable link
    Link(String),
}

/// Split a message into its display segments
///
/// An empty text body counts as absent. When media and text coexist
/// and the text contains `"http"`, the text is split at the first
/// occurrence: everything before stays plain, the rest becomes a link.
pub fn body_segments(message: &Message) -> Vec<BodySegment> {
    let text = message.text.as_deref().filter(|t| !t.is_empty());

    match (&message.media, text) {
        (Some(media), None) => vec![BodySegment::Image(media.clone())],
        (Some(media), Some(text)) => {
            if let Some(url_position) = text.find("http") {
                let (before, url) = text.split_at(url_position);
                vec![
                    BodySegment::Image(media.clone()),
                    BodySegment::Text(before.to_string()),
                    BodySegment::Link(url.to_string()),
                ]
            } else {
                vec![
                    BodySegment::Image(media.clone()),
                    BodySegment::Text(text.to_string()),
                ]
            }
        }
        (None, text) => vec![BodySegment::Text(text.unwrap_or_default().to_string())],
    }
}
