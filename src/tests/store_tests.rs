// Store Tests - fixture integrity, projection, and selection lookup

use crate::store::{
    Chat, ChatProvider, Direction, FixtureProvider, Message, StatusIcon, load_fixture,
    project_contacts,
};
use crate::tests::message;
use chrono::DateTime;

fn empty_chat(nick: &str) -> Chat {
    Chat {
        nick: nick.to_string(),
        name: format!("{} Test", nick),
        avatar: format!("https://example.com/{}.png", nick),
        last_message_at: DateTime::parse_from_rfc3339("2026-01-20T12:00:00-04:00").unwrap(),
        messages: Vec::new(),
    }
}

#[test]
fn test_fixture_loads() {
    let chats = load_fixture().expect("embedded fixture must parse");

    assert_eq!(chats.len(), 6, "Fixture carries six demo chats");
    let nicks: Vec<&str> = chats.iter().map(|c| c.nick.as_str()).collect();
    assert_eq!(
        nicks,
        vec!["alice", "bob", "charlie", "diana", "evan", "fiona"],
        "Chat order must match the fixture"
    );
    assert_eq!(chats[0].messages.len(), 15);
    assert_eq!(chats[1].messages.len(), 15);
}

#[test]
fn test_fixture_last_message_at_matches_tail_for_long_chats() {
    // The two full conversations keep last_message_at in sync with the
    // final message. The short demo chats drift by a minute in the
    // source data, so no invariant is enforced store-wide.
    let chats = load_fixture().unwrap();

    for chat in chats.iter().take(2) {
        let tail = chat.last_message().expect("fixture chats are non-empty");
        assert_eq!(
            chat.last_message_at, tail.sent_at,
            "last_message_at of '{}' should equal its final message timestamp",
            chat.nick
        );
    }
}

#[test]
fn test_fixture_alice_final_message_unread() {
    let chats = load_fixture().unwrap();
    let alice = &chats[0];
    let tail = alice.last_message().unwrap();

    assert_eq!(tail.text.as_deref(), Some("Talk later."));
    assert!(tail.from_me);
    assert!(!tail.is_read);
    assert_eq!(
        tail.status_icon(),
        Some(StatusIcon::Sent),
        "Unread outgoing tail shows the sent icon, not the read icon"
    );
}

#[test]
fn test_projection_takes_last_message() {
    let chats = load_fixture().unwrap();
    let contacts = project_contacts(&chats);

    assert_eq!(contacts.len(), chats.len(), "One contact per chat");
    for (contact, chat) in contacts.iter().zip(&chats) {
        assert_eq!(contact.nick, chat.nick, "Projection preserves order");
        assert_eq!(contact.name, chat.name);
        assert_eq!(contact.avatar, chat.avatar);
        assert_eq!(contact.last_message_at, chat.last_message_at);

        let projected = contact.last_message.as_ref().expect("non-empty chat");
        let tail = chat.last_message().unwrap();
        assert_eq!(projected.id, tail.id);
        assert_eq!(projected.text, tail.text);
    }
}

#[test]
fn test_projection_empty_chat_has_no_preview() {
    let chats = vec![empty_chat("ghost")];
    let contacts = project_contacts(&chats);

    assert_eq!(contacts.len(), 1);
    assert!(
        contacts[0].last_message.is_none(),
        "Empty chat projects to a contact without a last message"
    );
}

#[test]
fn test_projection_is_idempotent() {
    let chats = load_fixture().unwrap();
    let first = project_contacts(&chats);
    let second = project_contacts(&chats);

    let firsts: Vec<&str> = first.iter().map(|c| c.nick.as_str()).collect();
    let seconds: Vec<&str> = second.iter().map(|c| c.nick.as_str()).collect();
    assert_eq!(firsts, seconds);
}

#[test]
fn test_lookup_returns_messages_in_order() {
    let provider = FixtureProvider::new().unwrap();

    let messages = provider.messages_for("alice").expect("alice exists");
    assert_eq!(messages.len(), 15);
    let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
    let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
    assert_eq!(
        ids,
        expected.iter().map(String::as_str).collect::<Vec<_>>(),
        "Lookup must return the exact sequence, unmutated"
    );
}

#[test]
fn test_lookup_is_case_sensitive() {
    let provider = FixtureProvider::new().unwrap();

    assert!(provider.messages_for("Alice").is_none());
    assert!(provider.messages_for("ALICE").is_none());
    assert!(provider.messages_for("alice").is_some());
}

#[test]
fn test_lookup_miss_yields_none() {
    let provider = FixtureProvider::new().unwrap();

    assert!(
        provider.messages_for("nobody").is_none(),
        "Unknown nick yields not-found, never a panic"
    );
}

#[test]
fn test_lookup_first_match_wins() {
    let mut first = empty_chat("twin");
    first
        .messages
        .push(message("1", Some("from the first"), None, true, true));
    let mut second = empty_chat("twin");
    second
        .messages
        .push(message("1", Some("from the second"), None, true, true));

    let provider = FixtureProvider::with_chats(vec![first, second]);
    let messages = provider.messages_for("twin").unwrap();
    assert_eq!(messages[0].text.as_deref(), Some("from the first"));
}

#[test]
fn test_status_icon_never_shown_for_received() {
    let read = message("1", Some("hi"), None, false, true);
    let unread = message("2", Some("hi"), None, false, false);

    assert_eq!(read.status_icon(), None, "is_read is ignored for received");
    assert_eq!(unread.status_icon(), None);
}

#[test]
fn test_status_icon_for_outgoing() {
    let read = message("1", Some("hi"), None, true, true);
    let unread = message("2", Some("hi"), None, true, false);

    assert_eq!(read.status_icon(), Some(StatusIcon::Read));
    assert_eq!(unread.status_icon(), Some(StatusIcon::Sent));
    assert_eq!(StatusIcon::Read.glyph(), "✓✓");
    assert_eq!(StatusIcon::Sent.glyph(), "✓");
}

#[test]
fn test_direction_carried_independently_of_from_me() {
    // Nothing enforces agreement between the two fields; both survive
    // deserialization and the renderer keys off from_me alone.
    let json = r#"{
        "id": "9",
        "text": "odd one",
        "sent_at": "2026-01-20T12:00:00-04:00",
        "is_read": true,
        "direction": "received",
        "fromMe": true,
        "media": null
    }"#;
    let msg: Message = serde_json::from_str(json).unwrap();

    assert_eq!(msg.direction, Direction::Received);
    assert!(msg.from_me);
    assert_eq!(
        msg.status_icon(),
        Some(StatusIcon::Read),
        "Icon follows from_me even when direction disagrees"
    );
}

#[test]
fn test_message_time_label() {
    let msg = message("1", Some("hi"), None, true, true);
    assert_eq!(msg.time_label(), "12:00");
}
