//! UI rendering
//!
//! Rendering functions that transform state into terminal frames. They read
//! state and never change it.

pub mod composer;
pub mod list;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Focus};

/// Render the application UI
///
/// The composer textarea is a stateful widget owned by the event loop, so
/// it is passed in alongside the state.
pub fn render(frame: &mut Frame, state: &AppState, textarea: &TextArea<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Composer
            Constraint::Min(3),    // Jokes
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_title(frame, chunks[0], state);
    frame.render_widget(textarea, chunks[1]);
    list::render_jokes(frame, chunks[2], state);
    render_status_bar(frame, chunks[3], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.config.unicode {
        "Jokes for you 🐰"
    } else {
        "Jokes for you"
    };
    let style = if state.config.colors {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(title, style)).alignment(Alignment::Center),
        area,
    );
}

/// Status message, composer validation, or key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors;

    let (text, style) = if state.focus == Focus::Composer
        && state.composer.show_errors
        && !state.composer.errors.is_empty()
    {
        (state.composer.errors.join(", "), Style::default().fg(Color::Red))
    } else if let Some(ref message) = state.status.message {
        (message.clone(), Style::default().fg(Color::Green))
    } else {
        (String::new(), Style::default())
    };

    let hints = match state.focus {
        Focus::List => "j/k: Move | +/-: Rate | d: Delete | a: Add | F1: Help | q: Quit",
        Focus::Composer if state.can_submit() => {
            "Enter: Submit | Tab/Esc: Back to list | F1: Help | Ctrl+C: Quit"
        }
        Focus::Composer => "Tab/Esc: Back to list | F1: Help | Ctrl+C: Quit",
    };

    let lines = vec![
        Line::from(Span::styled(text, if colors { style } else { Style::default() })),
        Line::from(Span::styled(
            hints,
            if colors {
                Style::default().fg(Color::Gray)
            } else {
                Style::default()
            },
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);
    let marks = list::affordances(state.config.unicode);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Esc      - Close help / leave composer"),
        Line::from("  Ctrl+C   - Quit"),
        Line::from(""),
        Line::from("Jokes:"),
        Line::from("  j / Down - Next joke"),
        Line::from("  k / Up   - Previous joke"),
        Line::from(format!("  + / =    - Rate up {}", marks.up)),
        Line::from(format!("  -        - Rate down {}", marks.down)),
        Line::from(format!("  d / Del  - Delete {}", marks.delete)),
        Line::from("  a / Tab  - Add a joke"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from("Composer:"),
        Line::from("  Enter    - Submit"),
        Line::from("  Tab      - Back to list"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
