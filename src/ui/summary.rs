use crate::session::QuizSession;
use crate::ui::help_line;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use crate::view::ResultView;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());
    let view = ResultView::from_session(session);

    let title = Paragraph::new(view.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score = Paragraph::new(view.summary.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let width = layout.review_area.width.saturating_sub(2) as usize;
    let mut review = Text::default();
    for line in &view.review {
        let (mark, style) = match (&line.selected, line.is_correct) {
            (None, _) => ("[ ]", Style::default().fg(Color::DarkGray)),
            (Some(_), true) => ("[✓]", Style::default().fg(Color::Green)),
            (Some(_), false) => ("[✗]", Style::default().fg(Color::Red)),
        };
        review.push_line(Line::from(vec![
            Span::styled(mark, style),
            Span::from(format!(
                " {}. {}",
                line.number,
                truncate_string(&line.prompt, width.saturating_sub(8))
            )),
        ]));
        let answer = line.selected.as_deref().unwrap_or("(not answered)");
        review.push_line(Line::from(format!(
            "    Your Answer: {}",
            truncate_string(answer, width.saturating_sub(17))
        )));
        if !line.is_correct {
            review.push_line(Line::from(format!(
                "    Correct Answer: {}",
                truncate_string(&line.correct_answer, width.saturating_sub(20))
            )));
        }
    }

    let review = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);

    let help = Paragraph::new(help_line(&[
        ("r", "Retake"),
        ("m", "Main Menu"),
        ("Esc", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
