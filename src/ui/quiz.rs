use crate::app::QuizScreen;
use crate::ui::help_line;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::option_label;
use crate::view::{Feedback, OptionState, PrimaryControl, QuestionView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn option_style(state: OptionState, highlighted: bool) -> Style {
    let style = match state {
        OptionState::Available => Style::default(),
        OptionState::Disabled => Style::default().fg(Color::DarkGray),
        OptionState::Incorrect => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        OptionState::Correct => Style::default().fg(Color::Green),
        OptionState::CorrectSelected => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    if highlighted && state == OptionState::Available {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn option_marker(state: OptionState) -> &'static str {
    match state {
        OptionState::Incorrect => " ✗ your answer",
        OptionState::Correct => " ✓ correct answer",
        OptionState::CorrectSelected => " ✓ your answer",
        OptionState::Available | OptionState::Disabled => "",
    }
}

pub fn draw_quiz(f: &mut Frame, quiz: &QuizScreen) {
    let layout = calculate_quiz_chunks(f.area());
    let view = QuestionView::from_session(&quiz.session);

    let header = Paragraph::new(format!("{} - {}", view.header, quiz.session.name()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let status = Paragraph::new(view.score_status.as_str())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    f.render_widget(status, layout.status_area);

    let question = Paragraph::new(Text::from(view.prompt.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let mut options = Text::default();
    for (i, option) in view.options.iter().enumerate() {
        let highlighted = !view.locked && i == quiz.highlighted;
        let style = option_style(option.state, highlighted);
        options.push_line(Line::from(vec![
            Span::styled(format!("{} {}", option_label(i), option.label), style),
            Span::styled(option_marker(option.state), style),
        ]));
    }
    let options_title = if view.locked { "Options (locked)" } else { "Options" };
    let options = Paragraph::new(options)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(options_title));
    f.render_widget(options, layout.options_area);

    let feedback_line = match &view.feedback {
        None => Line::from(""),
        Some(feedback @ Feedback::Correct) => Line::from(Span::styled(
            feedback.message(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(feedback @ Feedback::Incorrect { .. }) => Line::from(Span::styled(
            feedback.message(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };
    let feedback = Paragraph::new(feedback_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback, layout.feedback_area);

    let mut entries = vec![("↑/↓", "Choose"), ("Enter/1-9", "Answer")];
    if view.can_retreat {
        entries.push(("←", "Previous"));
    }
    match view.primary {
        PrimaryControl::Next => entries.push(("→", "Next")),
        PrimaryControl::Submit => entries.push(("s", "Submit")),
    }
    entries.push(("Esc", "Menu"));
    let help = Paragraph::new(help_line(&entries))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_confirmation(f: &mut Frame, title: &str, message: &str, yes: &str, no: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", yes)),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}", no)),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

pub fn draw_submit_confirmation(f: &mut Frame, prompt: &str) {
    draw_confirmation(f, "Submit Quiz", prompt, "Yes (Submit)", "No (Keep Answering)");
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    draw_confirmation(
        f,
        "Quit to Menu",
        "Return to main menu? Your answers will be discarded.",
        "Yes (Return to Menu)",
        "No (Continue Quiz)",
    );
}
