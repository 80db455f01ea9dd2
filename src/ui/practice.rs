use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::app::App;
use crate::engine::PracticeRun;
use crate::ui::question::{self, QuestionView};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(run) = app.practice() else {
        return;
    };
    let Some(current) = run.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], run);
    render_progress(frame, chunks[1], run);

    question::render(
        frame,
        chunks[3],
        &QuestionView {
            question: current,
            cursor: app.option_cursor(),
            selected: run.selected(),
        },
    );

    let controls = if run.selected().is_some() {
        "enter next question  ·  r reset  ·  esc leave"
    } else {
        "j/k navigate  ·  enter answer  ·  r reset  ·  esc leave"
    };
    frame.render_widget(
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[4],
    );

    if app.confirm_reset_pending() {
        render_reset_confirm(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, run: &PracticeRun) {
    let stats = run.stats();

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).split(area);

    let title = Paragraph::new(Span::styled(
        "PRACTICE SIMULATOR",
        Style::default().fg(Color::Cyan).bold(),
    ));
    frame.render_widget(title, chunks[0]);

    let tally = Line::from(vec![
        Span::styled(format!("{} right", stats.correct), Style::default().fg(Color::Green)),
        Span::raw("  ·  ").fg(Color::DarkGray),
        Span::styled(format!("{} wrong", stats.incorrect), Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(
        Paragraph::new(tally).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_progress(frame: &mut Frame, area: Rect, run: &PracticeRun) {
    let total = run.total_questions().max(1);
    let ratio = (run.current_index() + 1) as f64 / total as f64;

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio.min(1.0))
        .label(format!("{}/{}", run.current_index() + 1, total));
    frame.render_widget(gauge, area);
}

fn render_reset_confirm(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);
    let popup = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(44),
        Constraint::Fill(1),
    ])
    .split(chunks[1])[1];

    frame.render_widget(Clear, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "reset all progress?",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from("fresh shuffle, tally back to zero".fg(Color::Gray)),
        Line::from(""),
        Line::from("y reset  ·  n keep going".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Red),
    );
    frame.render_widget(widget, popup);
}
