//! Message structures and status icon derivation

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Direction of a message
///
/// Carried independently of `from_me`: the sample data always agrees
/// with it, but nothing enforces that and the renderer keys off
/// `from_me` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Message authored locally
    Sent,
    /// Message authored by the contact
    Received,
}

/// Status icon shown next to an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// Sent and read by the recipient
    Read,
    /// Sent but not yet read
    Sent,
}

impl StatusIcon {
    /// Glyph used when rendering the icon
    pub fn glyph(&self) -> &str {
        match self {
            Self::Read => "✓✓",
            Self::Sent => "✓",
        }
    }
}

/// A single message within a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID, unique within its parent chat only
    pub id: String,
    /// Text body; may be absent when media is present
    #[serde(default)]
    pub text: Option<String>,
    /// When the message was sent
    pub sent_at: DateTime<FixedOffset>,
    /// Whether the recipient has read the message (meaningful for outgoing only)
    pub is_read: bool,
    /// Declared direction of the message
    pub direction: Direction,
    /// Whether the message was authored locally
    #[serde(rename = "fromMe")]
    pub from_me: bool,
    /// Media URL rendered as an inline image marker
    #[serde(default)]
    pub media: Option<String>,
}

impl Message {
    /// Status icon for this message
    ///
    /// Only outgoing messages carry an icon; `is_read` is ignored for
    /// received messages.
    pub fn status_icon(&self) -> Option<StatusIcon> {
        if !self.from_me {
            return None;
        }
        Some(if self.is_read {
            StatusIcon::Read
        } else {
            StatusIcon::Sent
        })
    }

    /// Time-of-day label for the bubble footer
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}
