//! joke-tui - Terminal UI for Jokebox
//!
//! Shows the jokes ranked by rating and lets the user add, rate and delete
//! them. Nothing is saved between sessions.

use joke_tui::{
    app::{
        event::{routes_to_composer, EventHandler, TuiEvent},
        key_to_action, reduce, Action, AppState,
    },
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, composer},
};
use libjokebox::logging::LoggingConfig;
use libjokebox::validation::validate_joke_text;
use libjokebox::{Config, JokeboxError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    // The TUI owns stdout/stderr, so logs only go to a configured file
    if config.logging.file.is_some() {
        LoggingConfig::from_settings(&config.logging, false)
            .init()
            .map_err(JokeboxError::from)?;
    }
    tracing::info!(
        id_policy = %config.store.id_policy,
        seed = config.store.seed,
        "Starting joke-tui"
    );

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, AppState::from_config(&config));

    restore_terminal(terminal)?;
    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let mut textarea = composer::new_textarea();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        composer::style_textarea(&mut textarea, &state);
        terminal.draw(|frame| ui::render(frame, &state, &textarea))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if routes_to_composer(&state, &key) => {
                textarea.input(key);
                Some(Action::ComposerInputChanged(composer::content(&textarea)))
            }
            TuiEvent::Key(key) => key_to_action(&state, key),
            other => Some(other.into()),
        };

        let Some(action) = action else {
            continue;
        };

        if !matches!(action, Action::Tick | Action::ComposerInputChanged(_)) {
            tracing::debug!(?action, "Dispatching");
        }

        let count = state.jokes.len();
        state = reduce(state, action.clone());

        // Validate composer content as it changes
        if let Action::ComposerInputChanged(ref content) = action {
            let validation = validate_joke_text(content);
            state = reduce(
                state,
                Action::ComposerValidationResult {
                    valid: validation.valid,
                    errors: validation.errors,
                    char_count: validation.char_count,
                },
            );
        }

        if let Action::ComposerSubmit = action {
            if state.jokes.len() > count {
                tracing::info!(jokes = state.jokes.len(), "Joke added");
            } else {
                tracing::debug!("Empty joke suppressed");
            }
        }

        // Sync textarea with state if content was cleared
        if state.composer.content.is_empty() && !composer::is_blank(&textarea) {
            textarea = composer::new_textarea();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
