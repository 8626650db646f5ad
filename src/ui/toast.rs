use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::session::Verdict;

/// Transient popup shown over the quiz while the answer reveal runs.
pub fn render(frame: &mut Frame, area: Rect, verdict: Verdict) {
    let (title, detail, color) = match verdict {
        Verdict::Correct => ("Correct!", "Good job!", Color::Green),
        Verdict::Wrong => ("Wrong Answer!", "Better luck next time!", Color::Red),
    };

    let popup = centered_rect(area, 32, 5);
    frame.render_widget(Clear, popup);

    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(detail.fg(Color::Gray)),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(color));
    frame.render_widget(widget, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
