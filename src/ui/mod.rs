mod quiz;
mod result;
mod toast;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    if app.session.is_finished() {
        result::render(frame, area, app);
    } else {
        quiz::render(frame, area, app);
        if let Some(verdict) = app.toast() {
            toast::render(frame, area, verdict);
        }
    }
}
