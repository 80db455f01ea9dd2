use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "EXAM TRAINER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("{} questions in the bank", app.bank().len()).fg(Color::DarkGray)),
        Line::from(format!("last quiz score: {}%", app.last_score()).fg(Color::DarkGray)),
    ];

    if let Some(run) = app.practice() {
        content.push(
            Line::from(format!(
                "practice run: {}/{} answered",
                run.stats().answered(),
                run.total_questions()
            ))
            .fg(Color::DarkGray),
        );
    } else {
        content.push(Line::from(""));
    }

    content.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("1", Style::default().fg(Color::Green).bold()),
            Span::raw(" timed quiz").fg(Color::Gray),
        ]),
        Line::from(vec![
            Span::styled("2", Style::default().fg(Color::Green).bold()),
            Span::raw(" practice simulator").fg(Color::Gray),
        ]),
        Line::from(""),
        Line::from("q quit".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
