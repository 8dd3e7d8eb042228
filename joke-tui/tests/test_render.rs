//! Test rendering against an in-memory terminal
//!
//! Draws full frames with ratatui's `TestBackend` and checks what ended up
//! on screen.

use joke_tui::app::{reduce, Action, AppState};
use joke_tui::ui::{self, composer};
use libjokebox::JokeAction;
use ratatui::{backend::TestBackend, Terminal};

fn draw(state: &AppState) -> String {
    let backend = TestBackend::new(120, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut textarea = composer::new_textarea();
    composer::style_textarea(&mut textarea, state);

    terminal
        .draw(|frame| ui::render(frame, state, &textarea))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ascii_state() -> AppState {
    let mut state = AppState::new();
    state.config.unicode = false;
    state.config.colors = false;
    state
}

fn row_of(screen: &str, needle: &str) -> usize {
    screen
        .lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{:?} not on screen:\n{}", needle, screen))
}

#[test]
fn test_renders_title_and_placeholder() {
    let screen = draw(&ascii_state());

    assert!(screen.contains("Jokes for you"));
    assert!(screen.contains("Add a joke"));
}

#[test]
fn test_renders_jokes_in_rank_order() {
    let state = reduce(ascii_state(), Action::Store(JokeAction::UpdateRate { id: 3, rating: 5 }));
    let screen = draw(&state);

    let termite = row_of(&screen, "A termite walks into the bar");
    let valentine = row_of(&screen, "A valen-tiny!");
    let math = row_of(&screen, "too many problems");

    assert!(termite < valentine);
    assert!(valentine < math);
}

#[test]
fn test_renders_ratings_and_affordances() {
    let screen = draw(&ascii_state());

    let row = row_of(&screen, "A valen-tiny!");
    let line = screen.lines().nth(row).unwrap();
    assert!(line.contains("3"));
    assert!(line.contains("[+] [-] [d]"));
}

#[test]
fn test_renders_joke_count() {
    let state = reduce(ascii_state(), Action::Store(JokeAction::DeleteJoke { id: 2 }));
    let screen = draw(&state);

    assert!(screen.contains("Jokes (4)"));
    assert!(!screen.contains("sandpaper"));
}

#[test]
fn test_renders_empty_list_hint() {
    let mut state = ascii_state();
    for id in 1..=5 {
        state = reduce(state, Action::Store(JokeAction::DeleteJoke { id }));
    }
    let screen = draw(&state);

    assert!(screen.contains("No jokes yet"));
}

#[test]
fn test_renders_status_message() {
    let state = reduce(ascii_state(), Action::RateSelectedUp);
    let screen = draw(&state);

    assert!(screen.contains("Rated joke #1 at 4"));
}

#[test]
fn test_renders_help_overlay() {
    let state = reduce(ascii_state(), Action::ShowHelp);
    let screen = draw(&state);

    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Press Esc or F1 to close"));
}

#[test]
fn test_renders_error_after_empty_submit() {
    let state = reduce(ascii_state(), Action::FocusComposer);
    let screen = draw(&state);
    assert!(!screen.contains("Joke cannot be empty"));

    let state = reduce(state, Action::ComposerSubmit);
    let screen = draw(&state);
    assert!(screen.contains("Joke cannot be empty"));
}

#[test]
fn test_error_clears_once_typing_resumes() {
    let state = reduce(ascii_state(), Action::FocusComposer);
    let state = reduce(state, Action::ComposerSubmit);
    let state = reduce(state, Action::ComposerInputChanged("W".to_string()));
    let screen = draw(&state);

    assert!(!screen.contains("Joke cannot be empty"));
}

#[test]
fn test_renders_whitespace_joke_row() {
    let state = reduce(ascii_state(), Action::FocusComposer);
    let state = reduce(state, Action::ComposerInputChanged("   ".to_string()));
    let state = reduce(state, Action::ComposerSubmit);
    let screen = draw(&state);

    assert!(screen.contains("Jokes (6)"));
    assert!(screen.contains("Joke added"));
}
