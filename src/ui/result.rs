use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, TableState},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session.score();
    let total = app.session.total_questions();
    let percentage = calculate_percentage(score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade_color);
    render_answer_log(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ FINISHED",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final Score: {} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_answer_log(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["#", "Question", "Your Answer", "Correct Answer", "Result"])
        .style(Style::default().fg(Color::DarkGray).bold());

    let rows: Vec<Row> = app
        .session
        .answer_log()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (verdict, color) = if record.was_correct {
                ("Correct", Color::Green)
            } else {
                ("Wrong", Color::Red)
            };

            Row::new(vec![
                Cell::from(format!("{}", index + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(record.question_text.as_str()),
                Cell::from(record.chosen_answer_text.as_str()),
                Cell::from(record.correct_answer_text.as_str()),
                Cell::from(verdict).style(Style::default().fg(color).bold()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(Block::default().padding(Padding::horizontal(1)));

    let mut state = TableState::default().with_offset(app.result_scroll());
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
