use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Answer;
use crate::session::{AnswerRecord, QuizResult, ResultTier};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.session().result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &result);
    render_question_breakdown(frame, chunks[2], app.session().history(), app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn tier_color(tier: ResultTier) -> Color {
    match tier {
        ResultTier::Outstanding => Color::Green,
        ResultTier::Great => Color::Cyan,
        ResultTier::Good => Color::Yellow,
        ResultTier::Encouragement => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let color = tier_color(result.tier);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", result.score, result.total, result.percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(result.tier.message(), Style::default().fg(color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, history: &[AnswerRecord], scroll: usize) {
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (symbol, color) = match record.answer {
                Answer::TimedOut => ("~", Color::Yellow),
                Answer::Chosen(_) if record.is_correct => ("+", Color::Green),
                Answer::Chosen(_) => ("-", Color::Red),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_question(&record.prompt), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
