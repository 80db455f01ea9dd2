mod home;
mod practice;
mod question;
mod session;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Home => home::render(frame, area, app),
        Screen::Session => session::render(frame, area, app),
        Screen::Practice => practice::render(frame, area, app),
    }
}
