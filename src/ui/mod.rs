pub mod layout;
mod menu;
mod quiz;
mod status;
mod summary;

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub use layout::{calculate_menu_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz, draw_submit_confirmation};
pub use status::{draw_load_failed, draw_loading};
pub use summary::draw_summary;

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, &app.menu),
        AppState::Loading => draw_loading(f),
        AppState::LoadFailed => draw_load_failed(f, app.load_error.as_deref()),
        AppState::Quiz => {
            if let Some(quiz) = &app.quiz {
                draw_quiz(f, quiz);
            }
        }
        AppState::SubmitConfirm => {
            if let Some(prompt) = app.submit_prompt() {
                draw_submit_confirmation(f, &prompt);
            }
        }
        AppState::QuitConfirm => draw_quit_confirmation(f),
        AppState::Summary => {
            if let Some(quiz) = &app.quiz {
                draw_summary(f, &quiz.session);
            }
        }
    }
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// A help bar line from `(key, description)` pairs.
fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, (key, description)) in entries.iter().enumerate() {
        spans.push(Span::styled(key.to_string(), key_style()));
        let sep = if i + 1 < entries.len() { "  " } else { "" };
        spans.push(Span::from(format!(" {}{}", description, sep)));
    }
    Line::from(spans)
}
