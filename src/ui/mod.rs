mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::SessionState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state() {
        SessionState::Idle => welcome::render(frame, area, app),
        SessionState::InProgress(_) => quiz::render(frame, area, app),
        SessionState::Complete => result::render(frame, area, app),
    }
}
