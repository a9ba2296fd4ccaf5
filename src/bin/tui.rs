//! Burble TUI (Terminal User Interface)
//!
//! A terminal chat viewer: contact sidebar, message bubbles, and a
//! shell update prompt, all fed through the bridge.

use burble::bridge::{Bridge, UiRequest};
use burble::store::FixtureProvider;
use burble::tui::{App, UpdateStatus, ui::ui};
use burble::update::{StaticFeed, UpdateInfo, Updater};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Data side: fixture store plus a canned release announcement
    let provider = FixtureProvider::new()?;
    let updater = Updater::new(Box::new(StaticFeed::announcing(UpdateInfo {
        version: "0.3.0".to_string(),
        notes: Some("Bug fixes and a fresh coat of paint.".to_string()),
    })));
    let bridge = Bridge::new(Box::new(provider), updater).spawn();

    // Create app state and check for updates once at startup
    let mut app = App::new();
    bridge.send(UiRequest::CheckForUpdates)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app, &bridge);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    bridge: &burble::bridge::BridgeHandle,
) -> io::Result<()> {
    loop {
        // Drain everything the bridge delivered since the last frame
        while let Some(bridge_event) = bridge.try_recv() {
            app.apply_event(bridge_event);
        }

        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.update_prompt_visible() {
                    handle_update_prompt_key(app, bridge, key.code);
                } else {
                    handle_key(app, bridge, key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Key handling while the update popup is on screen
fn handle_update_prompt_key(
    app: &mut App,
    bridge: &burble::bridge::BridgeHandle,
    code: KeyCode,
) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('d') if matches!(app.update, UpdateStatus::Available(_)) => {
            let _ = bridge.send(UiRequest::StartUpdateDownload);
        }
        KeyCode::Char('i') | KeyCode::Enter if matches!(app.update, UpdateStatus::Ready(_)) => {
            // Install hands control to the shell; the viewer quits and
            // the packaged updater restarts it.
            let _ = bridge.send(UiRequest::InstallUpdate);
            app.should_quit = true;
        }
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Esc => {
            app.dismiss_update_prompt();
        }
        _ => {}
    }
}

/// Key handling for the chat view itself
fn handle_key(app: &mut App, bridge: &burble::bridge::BridgeHandle, code: KeyCode) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc => {
            app.clear_selection();
        }
        KeyCode::Char('u') => {
            let _ = bridge.send(UiRequest::CheckForUpdates);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(pane) = &mut app.chat_pane {
                let max_offset = app.messages.len().saturating_sub(10);
                pane.scroll_down(max_offset);
            } else {
                app.next_contact();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(pane) = &mut app.chat_pane {
                pane.scroll_up();
            } else {
                app.previous_contact();
            }
        }
        KeyCode::Tab => {
            // Sidebar stays navigable while a chat is open
            app.next_contact();
        }
        KeyCode::BackTab => {
            app.previous_contact();
        }
        KeyCode::Enter => {
            if let Some(request) = app.select_under_cursor() {
                let _ = bridge.send(request);
            }
        }
        _ => {}
    }
}
