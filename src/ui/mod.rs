mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Phase;

const ACCENT: Color = Color::LightRed;
const YES: Color = Color::Cyan;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.phase() {
        Phase::Answering { .. } => quiz::render(frame, area, app),
        Phase::ShowingResults => result::render(frame, area, app),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = app.notice() {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}
