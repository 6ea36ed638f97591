use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use super::{ACCENT, YES, render_notice};
use crate::app::App;
use crate::data::{QUESTION_COUNT, QUESTIONS_PER_PAGE};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Title
        Constraint::Length(2), // Progress
        Constraint::Fill(1),   // Questions
        Constraint::Length(1), // Navigation
        Constraint::Length(1), // Notice
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_progress(frame, chunks[1], app);
    render_questions(frame, chunks[2], app);
    render_navigation(frame, chunks[3], app);
    render_notice(frame, chunks[4], app);
    render_controls(frame, chunks[5]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Is Your Loyalty Program Really Working?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(
            "A 10-question \"yes or no\" check-up for brands that want to grow repeat business."
                .fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let label = format!(
        "{} of {} questions answered",
        session.answered_count(),
        QUESTION_COUNT
    );
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(YES).bg(Color::DarkGray))
        .ratio(session.progress_percent() / 100.0)
        .label("");
    let [gauge_area] = Layout::horizontal([Constraint::Percentage(50)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    frame.render_widget(gauge, gauge_area);
}

fn render_questions(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let first_number = session.current_page() * QUESTIONS_PER_PAGE + 1;
    let questions = session.current_questions();

    let chunks = Layout::vertical(questions.iter().map(|_| Constraint::Length(5))).split(area);

    for (index, question) in questions.iter().enumerate() {
        let focused = index == app.cursor();
        render_question(frame, chunks[index], question, first_number + index, focused);
    }
}

fn render_question(frame: &mut Frame, area: Rect, question: &Question, number: usize, focused: bool) {
    let border = if focused { ACCENT } else { Color::DarkGray };

    let content = vec![
        Line::from(question.text).fg(Color::White),
        Line::from(""),
        Line::from(vec![
            answer_button("YES", question.answer() == Some(true), YES),
            Span::raw("   "),
            answer_button("NO", question.answer() == Some(false), ACCENT),
        ]),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", number))
            .title_style(Style::default().fg(ACCENT).bold())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn answer_button(label: &'static str, selected: bool, color: Color) -> Span<'static> {
    let text = format!(" {} ", label);
    if selected {
        Span::styled(text, Style::default().fg(Color::Black).bg(color).bold())
    } else {
        Span::styled(text, Style::default().fg(Color::Gray).bg(Color::DarkGray))
    }
}

fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let page = session.current_page();

    let previous_style = if page == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let (next_label, next_enabled) = if session.is_last_page() {
        ("VIEW RESULTS", session.is_complete())
    } else {
        ("NEXT", session.can_advance(page))
    };
    let next_style = if next_enabled {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(Paragraph::new("< PREVIOUS").style(previous_style), chunks[0]);
    frame.render_widget(
        Paragraph::new(format!("Page {} of {}", page + 1, session.total_pages()))
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(format!("{} >", next_label))
            .alignment(Alignment::Right)
            .style(next_style),
        chunks[2],
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k focus  ·  y/n answer  ·  enter next  ·  h back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
