use crate::app::LOAD_ERROR_MESSAGE;
use crate::ui::help_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_loading(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.area());

    let loading = Paragraph::new("Loading quiz...")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, chunks[0]);
}

pub fn draw_load_failed(f: &mut Frame, detail: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(3)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    let mut text = Text::default();
    text.push_line(Line::styled(
        LOAD_ERROR_MESSAGE,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    if let Some(detail) = detail {
        text.push_line(Line::from(""));
        text.push_line(Line::from(detail.to_string()));
    }

    let message = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(message, chunks[0]);

    let help = Paragraph::new(help_line(&[("Enter/m", "Main Menu"), ("q", "Quit")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
