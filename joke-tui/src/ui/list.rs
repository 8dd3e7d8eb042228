//! Ranked joke list

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{AppState, Focus};

/// Labels for the rate-up, rate-down and delete affordances
pub struct Affordances {
    pub up: &'static str,
    pub down: &'static str,
    pub delete: &'static str,
}

pub fn affordances(unicode: bool) -> Affordances {
    if unicode {
        Affordances {
            up: "🎉",
            down: "🤐",
            delete: "🗑",
        }
    } else {
        Affordances {
            up: "[+]",
            down: "[-]",
            delete: "[d]",
        }
    }
}

fn rating_style(rating: i64, colors: bool) -> Style {
    if !colors {
        return Style::default().add_modifier(Modifier::BOLD);
    }
    let color = match rating {
        r if r > 0 => Color::Green,
        0 => Color::Gray,
        _ => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Render the jokes, highest rating first
pub fn render_jokes(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = state.ranked();
    let marks = affordances(state.config.unicode);
    let colors = state.config.colors;

    let border = if colors && state.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(format!(" Jokes ({}) ", view.len()))
        .title_bottom(Line::from(format!(
            " {} + | {} - | {} d ",
            marks.up, marks.down, marks.delete
        )))
        .borders(Borders::ALL)
        .border_style(border);

    if view.is_empty() {
        let empty = Paragraph::new("No jokes yet. Press a to add one.")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let hint_style = if colors {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = view
        .iter()
        .map(|joke| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}", joke.rating), rating_style(joke.rating, colors)),
                Span::raw("  "),
                Span::raw(joke.text.as_str()),
                Span::styled(
                    format!("  {} {} {}", marks.up, marks.down, marks.delete),
                    hint_style,
                ),
            ]))
        })
        .collect();

    let highlight = if colors {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
