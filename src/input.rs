use crate::app::App;
use crate::models::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        // the quiz is hidden until the load resolves
        AppState::Loading => {
            if key.code == KeyCode::Esc {
                app.should_quit = true;
            }
        }
        AppState::LoadFailed => handle_load_failed_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::SubmitConfirm => handle_submit_confirm_input(app, key),
        AppState::QuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.menu.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.select_next(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.menu.push_count_digit(c),
        KeyCode::Backspace => app.menu.pop_count_digit(),
        KeyCode::Enter => app.start_selected(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_load_failed_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => app.return_to_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    let Some(quiz) = &mut app.quiz else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.state = AppState::QuitConfirm,
        KeyCode::Up | KeyCode::Char('k') => quiz.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => quiz.highlight_next(),
        KeyCode::Left | KeyCode::Char('h') => {
            if quiz.session.retreat() {
                quiz.highlighted = 0;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if quiz.session.advance() {
                quiz.highlighted = 0;
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let option_index = (c as usize) - ('1' as usize);
            if option_index < quiz.session.current_question().options.len() {
                quiz.highlighted = option_index;
                quiz.session.select_current(option_index);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if quiz.session.current_answer().is_none() {
                quiz.session.select_current(quiz.highlighted);
            } else if quiz.session.is_last_question() {
                app.request_submit();
            } else if quiz.session.advance() {
                quiz.highlighted = 0;
            }
        }
        KeyCode::Char('s') => {
            // submit is only offered on the last question
            if quiz.session.is_last_question() {
                app.request_submit();
            }
        }
        _ => {}
    }
}

fn handle_submit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_submit(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.state = AppState::Quiz,
        _ => {}
    }
}

fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.return_to_menu(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.state = AppState::Quiz,
        _ => {}
    }
}

fn handle_summary_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('m') => app.return_to_menu(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
