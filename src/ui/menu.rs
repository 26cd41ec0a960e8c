use crate::app::MenuState;
use crate::loader::quiz_name;
use crate::ui::layout::calculate_menu_chunks;
use crate::ui::{help_line, key_style};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw_menu(f: &mut Frame, menu: &MenuState) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Multiple-Choice Quiz v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let items: Vec<ListItem> = if menu.files.is_empty() {
        vec![ListItem::new("No quiz files found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        menu.files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let style = if i == menu.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(quiz_name(path)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select a Quiz"),
    );
    f.render_widget(list, layout.files_area);

    let count_line = if menu.count_input.is_empty() {
        Line::from(Span::styled(
            "[all questions]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(menu.count_input.clone(), key_style()))
    };
    let count = Paragraph::new(count_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Number of questions (0-9, Backspace)"),
    );
    f.render_widget(count, layout.count_area);

    let help = Paragraph::new(help_line(&[
        ("↑/↓", "Navigate"),
        ("Enter", "Start"),
        ("Esc/Ctrl+C", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
