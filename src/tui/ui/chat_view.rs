//! Chat zone rendering: header, bubbles, placeholder

use crate::store::Message;
use crate::tui::app::App;
use crate::tui::types::{BodySegment, BubbleAlign, body_segments};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the chat zone

pub fn render_chat_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Help
        ])
        .split(area);

    let Some(contact) = app.selected_contact() else {
        render_no_chat_selected(f, app, chunks);
        return;
    };

    // Header - name and nick of the open chat
    let header = Paragraph::new(format!("{} (@{})", contact.name, contact.nick))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Message history
    if app.messages.is_empty() {
        let empty = Paragraph::new("No messages in this chat.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Messages"));
        f.render_widget(empty, chunks[1]);
    } else {
        let total = app.messages.len();
        let visible_height = chunks[1].height.saturating_sub(2) as usize;
        let start_idx = app
            .chat_pane
            .as_ref()
            .map(|p| p.scroll_offset)
            .unwrap_or(0)
            .min(total.saturating_sub(1));
        let end_idx = (start_idx + visible_height.max(1)).min(total);

        let lines: Vec<Line> = app.messages[start_idx..end_idx]
            .iter()
            .map(bubble_line)
            .collect();

        let messages = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Messages ({}/{})", end_idx, total)),
        );
        f.render_widget(messages, chunks[1]);
    }

    // Help
    let help = Paragraph::new("↑↓: Scroll | Esc: Close Chat | u: Check Updates | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

/// One rendered bubble: body segments plus time and status icon
fn bubble_line(message: &Message) -> Line<'static> {
    let align = BubbleAlign::of(message);
    let (line_alignment, body_color) = match align {
        BubbleAlign::Sent => (Alignment::Right, Color::Green),
        BubbleAlign::Received => (Alignment::Left, Color::White),
    };

    let mut spans: Vec<Span> = Vec::new();
    for segment in body_segments(message) {
        match segment {
            BodySegment::Image(url) => spans.push(Span::styled(
                format!("[image: {}] ", url),
                Style::default().fg(Color::Magenta),
            )),
            BodySegment::Text(text) => {
                spans.push(Span::styled(text, Style::default().fg(body_color)))
            }
            BodySegment::Link(url) => spans.push(Span::styled(
                url,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        }
    }

    spans.push(Span::styled(
        format!("  {}", message.time_label()),
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(icon) = message.status_icon() {
        spans.push(Span::styled(
            format!(" {}", icon.glyph()),
            Style::default().fg(Color::Blue),
        ));
    }

    Line::from(spans).alignment(line_alignment)
}

/// Placeholder shown at startup and after the selection is cleared
fn render_no_chat_selected(f: &mut Frame, app: &App, chunks: std::rc::Rc<[Rect]>) {
    // Header stays empty while nothing is selected
    let header = Paragraph::new("").block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let hint = if app.contacts.is_some() {
        "No chat selected.\n\nPick a contact with ↑↓ and press Enter."
    } else {
        "No chat selected.\n\nWaiting for contacts..."
    };
    let placeholder = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, chunks[1]);

    let help = Paragraph::new("↑↓/j/k: Navigate | Enter: Open Chat | u: Check Updates | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
