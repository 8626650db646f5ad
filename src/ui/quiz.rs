use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AnswerOption;
use crate::session::QUESTION_SECONDS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_timer(frame, chunks[1], app.session.seconds_remaining());

    if let Some(question) = app.session.current_question() {
        render_question_text(frame, chunks[3], &question.text);
        render_options(frame, chunks[4], &question.options, app.selected_option());
    }

    render_controls(frame, chunks[5]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Question {} of {}",
        app.session.question_number(),
        app.session.total_questions()
    );
    let score = format!("Score: {}", app.session.score());

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), halves[0]);
    frame.render_widget(
        Paragraph::new(score)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        halves[1],
    );
}

fn render_timer(frame: &mut Frame, area: Rect, seconds: u32) {
    let color = if seconds <= 7 {
        Color::Red
    } else if seconds <= 13 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .ratio(f64::from(seconds) / f64::from(QUESTION_SECONDS))
        .gauge_style(Style::default().fg(color))
        .label(format!("{} sec", seconds));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[AnswerOption], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_label(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
