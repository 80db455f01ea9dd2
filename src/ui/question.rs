use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Question;

/// Shared question renderer for both quiz views: prompt, option list with
/// cursor and answer feedback, and the explanation once answered.
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub cursor: usize,
    pub selected: Option<usize>,
}

pub fn render(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(6),
    ])
    .split(area);

    render_prompt(frame, chunks[0], &view.question.prompt);
    render_options(frame, chunks[1], view);

    if view.selected.is_some() {
        render_explanation(frame, chunks[2], view);
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let question = view.question;
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = match view.selected {
            None => {
                let is_under_cursor = index == view.cursor;
                let style = if is_under_cursor {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                (if is_under_cursor { ">" } else { " " }, style)
            }
            Some(selected) => {
                if index == question.correct {
                    ("+", Style::default().fg(Color::Green).bold())
                } else if index == selected {
                    ("x", Style::default().fg(Color::Red))
                } else {
                    (" ", Style::default().fg(Color::DarkGray))
                }
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let question = view.question;
    let was_correct = view.selected == Some(question.correct);
    let (title, color) = if was_correct {
        (" correct ", Color::Green)
    } else {
        (" incorrect ", Color::Red)
    };

    let widget = Paragraph::new(question.explanation.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(color)
                .title(Span::styled(title, Style::default().fg(color).bold()))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
