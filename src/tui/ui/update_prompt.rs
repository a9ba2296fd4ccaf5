//! Update prompt popup rendering

use crate::tui::app::{App, UpdateStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the update popup over the given area

pub fn render_update_prompt(f: &mut Frame, app: &App, area: Rect) {
    let popup_width = 54;
    let popup_height = 9;

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    let popup_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Message
            Constraint::Length(2), // Buttons
        ])
        .split(popup_area);

    // Clear the popup area with a background block
    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    f.render_widget(background, popup_area);

    let title = Paragraph::new("Shell Update")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, popup_chunks[0]);

    let (message, buttons) = match &app.update {
        UpdateStatus::Available(info) => (
            vec![
                Line::from(format!("Version {} is available.", info.version)),
                Line::from(Span::styled(
                    info.notes.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            Line::from(vec![
                Span::styled(
                    "[D]",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("ownload  "),
                Span::styled(
                    "[L]",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("ater"),
            ]),
        ),
        UpdateStatus::Downloading { percent } => (
            vec![Line::from(format!("Downloading update... {}%", percent))],
            Line::from(Span::styled(
                "Please wait",
                Style::default().fg(Color::DarkGray),
            )),
        ),
        UpdateStatus::Ready(info) => (
            vec![Line::from(format!(
                "Version {} is ready. Installing restarts the app.",
                info.version
            ))],
            Line::from(vec![
                Span::styled(
                    "[I]",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("nstall  "),
                Span::styled(
                    "[L]",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("ater"),
            ]),
        ),
        UpdateStatus::None => (Vec::new(), Line::from("")),
    };

    let message = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(message, popup_chunks[1]);

    let buttons = Paragraph::new(buttons).alignment(Alignment::Center);
    f.render_widget(buttons, popup_chunks[2]);
}
