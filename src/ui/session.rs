use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::engine::SessionPhase;
use crate::models::Difficulty;
use crate::ui::question::{self, QuestionView};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.session().phase() {
        SessionPhase::NameEntry => render_name_entry(frame, area, app),
        SessionPhase::DifficultySelection => render_difficulty(frame, area, app),
        SessionPhase::Answering => render_answering(frame, area, app),
        SessionPhase::Result => render_result(frame, area, app),
    }
}

fn render_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("enter your name".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}_", app.name_input()),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from("enter continue  ·  esc back".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
    }
}

fn render_difficulty(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("pick a difficulty, {}", app.session().player_name()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        let is_under_cursor = index == app.difficulty_cursor();
        let style = if is_under_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_under_cursor { ">" } else { " " };
        let count = app.bank().partition(*difficulty).count();
        content.push(Line::from(Span::styled(
            format!(
                "{} {}. {} ({} questions)",
                marker,
                index + 1,
                difficulty_label(*difficulty),
                count
            ),
            style,
        )));
    }

    content.extend([
        Line::from(""),
        Line::from("j/k move  ·  1-3 pick  ·  enter start  ·  esc back".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn render_answering(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(current) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let progress = format!(
        "{}/{}",
        session.current_index() + 1,
        session.total_questions()
    );
    frame.render_widget(
        Paragraph::new(progress)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[0],
    );

    question::render(
        frame,
        chunks[1],
        &QuestionView {
            question: current,
            cursor: app.option_cursor(),
            selected: session.selected(),
        },
    );

    let controls = if session.selected().is_some() {
        "enter next question  ·  esc leave"
    } else {
        "j/k navigate  ·  enter answer  ·  esc leave"
    };
    frame.render_widget(
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[2],
    );
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let percentage = session.final_percentage();
    let grade_color = match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(session.player_name().to_string().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                session.score(),
                session.total_questions(),
                percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from("r play again  ·  esc back".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
