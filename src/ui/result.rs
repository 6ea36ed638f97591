use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{ACCENT, YES, render_notice};
use crate::app::App;
use crate::data::QUESTION_COUNT;
use crate::models::ScoreTier;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let tier = session.result_tier();

    let chunks = Layout::vertical([
        Constraint::Length(3),  // Title
        Constraint::Length(11), // Score card
        Constraint::Length(3),  // Buttons
        Constraint::Length(1),  // Notice
        Constraint::Fill(1),
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Your Results Are In!",
        Style::default().fg(Color::White).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_score_card(frame, chunks[1], session.yes_count(), tier);
    render_buttons(frame, chunks[2], tier);
    render_notice(frame, chunks[3], app);
    render_controls(frame, chunks[5]);
}

fn tier_color(tier: &ScoreTier) -> Color {
    match tier.min {
        9.. => YES,
        6..=8 => Color::Blue,
        3..=5 => Color::Yellow,
        _ => ACCENT,
    }
}

fn render_score_card(frame: &mut Frame, area: Rect, yes_count: usize, tier: &ScoreTier) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/{}", yes_count, QUESTION_COUNT),
            Style::default().fg(tier_color(tier)).bold(),
        )),
        Line::from(""),
        Line::from(tier.description.fg(Color::Gray)),
    ];

    let [card] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(area);
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(widget, card);
}

fn render_buttons(frame: &mut Frame, area: Rect, tier: &ScoreTier) {
    let content = Line::from(vec![
        Span::styled(
            " [r] TAKE QUIZ AGAIN ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
        Span::raw("    "),
        Span::styled(
            format!(" [c] {} ", tier.button_text),
            Style::default().fg(Color::White).bg(ACCENT).bold(),
        ),
    ]);

    let widget = Paragraph::new(vec![Line::from(""), content]).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r restart  ·  c / enter contact  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
