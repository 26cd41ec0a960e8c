use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use multichoice_quiz::{App, AppConfig, draw, handle_key, logger};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();
    logger::init(&config.log_file);
    logger::log(&format!(
        "Starting multichoice-quiz (quiz dir: {})",
        config.quiz_dir.display()
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.poll_load();
        terminal.draw(|f| draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }
    }
    Ok(())
}
