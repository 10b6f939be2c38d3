//! Full-screen `ratatui` front-end for the settings navigator.

use crate::log_debug;
use crate::terminal_restore::TerminalRestoreGuard;
use crate::App;
use anyhow::Result;
use crossterm::event;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub const FOCUS_HINT: &str = "Press Tab to move the focus.";

/// Configure the terminal, run the drawing loop, and tear everything down.
pub fn run_app(app: &mut App) -> Result<()> {
    let terminal_guard = TerminalRestoreGuard::new();
    let mut stdout = io::stdout();
    terminal_guard.activate(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app_loop(&mut terminal, app);

    drop(terminal);
    terminal_guard.restore();

    result
}

/// Core event/render loop.
fn app_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Initial render to show the menu immediately on startup
    terminal.draw(|frame| draw(frame, app))?;

    loop {
        let mut should_draw = app.take_redraw_request();
        let mut should_quit = false;

        if event::poll(app.poll_interval())? {
            match event::read()? {
                Event::Key(key) => {
                    // Handle the key BEFORE drawing to avoid input lag
                    should_quit = handle_key_event(app, key)?;
                    should_draw = true;
                }
                Event::Resize(_, _) => {
                    should_draw = true;
                }
                _ => {} // Ignore other events
            }
        }

        if should_draw {
            terminal.draw(|frame| draw(frame, app))?;
        }

        if should_quit {
            break;
        }
    }
    Ok(())
}

/// Interpret keystrokes into engine signals.
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    log_debug(&format!(
        "Key event: {:?} with modifiers: {:?}",
        key.code, key.modifiers
    ));

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        // Terminals fold Ctrl+M into Enter, so chords must not activate.
        KeyCode::Enter | KeyCode::Char(' ') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.activate_focused()
        }
        _ => {}
    }

    Ok(app.should_exit())
}

/// Render the hint line, menu pane, and status panel.
fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(frame.size());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Classic settings palette: olive menu pane, green status panel, red focus.
    let menu_bg = Color::Rgb(136, 136, 0);
    let panel_bg = Color::Rgb(0, 170, 0);
    let focus_bg = Color::Rgb(255, 0, 0);
    let text_color = Color::Rgb(0, 0, 0);

    let hint = Paragraph::new(FOCUS_HINT);
    frame.render_widget(hint, chunks[0]);

    // Borders take two columns, the highlight symbol two more.
    let label_width = usize::from(panes[0].width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .screen()
        .items
        .iter()
        .map(|item| ListItem::new(clip_label(&item.label, label_width)))
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    format!(" {} ", app.current_menu().title()),
                    Style::default()
                        .fg(text_color)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().bg(menu_bg).fg(text_color))
        .highlight_style(Style::default().bg(focus_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    // Seat the engine's focus; a selection the list cannot honor is dropped
    // rather than drawn wrong.
    let mut list_state = ListState::default();
    list_state.select(app.selected().filter(|index| *index < app.screen().len()));
    frame.render_stateful_widget(menu, panes[0], &mut list_state);

    let status = Paragraph::new(app.status_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Status ", Style::default().fg(text_color))),
        )
        .style(Style::default().bg(panel_bg).fg(text_color));
    frame.render_widget(status, panes[1]);
}

/// Clip a label to `max_width` terminal columns, appending an ellipsis when
/// anything was cut. Device descriptions can be arbitrarily long.
fn clip_label(label: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(label) <= max_width {
        return label.to_string();
    }
    let mut clipped = String::new();
    let mut used = 0usize;
    let limit = max_width.saturating_sub(1);
    for ch in label.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > limit {
            break;
        }
        clipped.push(ch);
        used += width;
    }
    clipped.push('…');
    clipped
}
