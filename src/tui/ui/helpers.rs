//! UI helper functions: preview text and relative-time labels

use crate::store::Message;
use chrono::{DateTime, FixedOffset, Utc};

/// Longest preview before truncation, in characters
const PREVIEW_MAX_CHARS: usize = 30;

/// Sidebar preview line for a contact's last message
///
/// No last message or no text yields an empty preview. A text carrying
/// a URL collapses to a kind label ("Image" when media is attached,
/// "Link" otherwise); anything else is shown truncated.
pub fn preview_text(last_message: Option<&Message>) -> String {
    let Some(message) = last_message else {
        return String::new();
    };
    let Some(text) = message.text.as_deref().filter(|t| !t.is_empty()) else {
        return String::new();
    };

    if text.contains("http") {
        let label = if message.media.is_some() {
            "Image"
        } else {
            "Link"
        };
        return label.to_string();
    }

    if text.chars().count() <= PREVIEW_MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}...", head)
    }
}

/// Relative-time label for a contact's last activity
///
/// Bands are checked in order on integer-floored elapsed units:
/// under a minute, under an hour, under a day, exactly one day,
/// under a week, then a day/month date.
pub fn relative_time(timestamp: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp.with_timezone(&Utc));

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = elapsed.num_days();
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < 7 {
        return format!("{}d ago", days);
    }

    timestamp.format("%d/%m").to_string()
}
