//! Composer widget with tui-textarea integration
//!
//! The textarea owns the cursor and editing; `AppState::composer` mirrors
//! its content so the reducer can validate and submit it.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::app::{AppState, Focus};

pub const PLACEHOLDER: &str = "Add a joke";

/// Fresh, empty composer
pub fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());
    textarea
}

/// Content as the reducer sees it
pub fn content(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Whether the textarea holds no text at all
pub fn is_blank(textarea: &TextArea<'_>) -> bool {
    textarea.lines().iter().all(|line| line.is_empty())
}

/// Border and cursor styling from focus and validation state
pub fn style_textarea(textarea: &mut TextArea<'_>, state: &AppState) {
    let focused = state.focus == Focus::Composer;
    let colors = state.config.colors;

    let border = match (colors, focused) {
        (false, _) => Style::default(),
        (true, false) => Style::default().fg(Color::DarkGray),
        (true, true) if state.composer.content.is_empty() || state.composer.valid => {
            Style::default().fg(Color::Green)
        }
        (true, true) => Style::default().fg(Color::Red),
    };

    textarea.set_block(
        Block::default()
            .title(" Add a joke (Enter to submit) ")
            .borders(Borders::ALL)
            .border_style(border),
    );

    // Hide the cursor unless typing goes here
    textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}
