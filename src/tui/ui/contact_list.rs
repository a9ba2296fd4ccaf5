//! Contact sidebar rendering

use crate::tui::app::App;
use crate::tui::ui::helpers::{preview_text, relative_time};
use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Renders the sidebar

pub fn render_contact_list(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Contact list
            Constraint::Length(3), // Status message
        ])
        .split(area);

    // Title
    let title = Paragraph::new(format!("Contacts ({})", app.contact_count()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Contact list, or a loading notice until the directory arrives
    match &app.contacts {
        None => {
            let loading = Paragraph::new("Loading contacts...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Contacts"));
            f.render_widget(loading, chunks[1]);
        }
        Some(contacts) => {
            let now = Utc::now();
            let items: Vec<ListItem> = contacts
                .iter()
                .enumerate()
                .map(|(i, contact)| {
                    let selected = app.is_selected(&contact.nick);
                    let name_style = if selected {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let cursor = if i == app.contact_pane.cursor {
                        "→ "
                    } else {
                        "  "
                    };

                    let header = Line::from(vec![
                        Span::styled(cursor, Style::default().fg(Color::Cyan)),
                        Span::styled(contact.name.clone(), name_style),
                        Span::raw(" "),
                        Span::styled(
                            relative_time(contact.last_message_at, now),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]);
                    let preview = Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            preview_text(contact.last_message.as_ref()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]);
                    ListItem::new(vec![header, preview])
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Contacts (→ Cursor | Green: Open Chat)"),
            );
            f.render_widget(list, chunks[1]);
        }
    }

    // Status message
    let status_text = app
        .contact_pane
        .status_message
        .as_deref()
        .unwrap_or("");
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);
}
