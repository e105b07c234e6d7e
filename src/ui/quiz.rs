use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, LineGauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Answer, DisplayedOption};
use crate::session::{QuizSession, Urgency};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_timer(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &question.category, &question.prompt);
    render_options(
        frame,
        chunks[3],
        session.displayed_options(),
        app.cursor(),
        session.selected_answer(),
        question.correct_index,
    );
    render_controls(frame, chunks[4], session.selected_answer(), question.correct_index);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let [left, middle, right] = Layout::horizontal([
        Constraint::Length(20),
        Constraint::Fill(1),
        Constraint::Length(12),
    ])
    .spacing(1)
    .areas(area);

    let progress = format!(
        "Question {} of {}",
        session.question_number(),
        session.pool_size()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::Cyan).bold(), left);

    let ratio = session.progress().clamp(0.0, 1.0);
    let bar = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    frame.render_widget(bar, middle);

    let score = format!("Score: {}", session.score());
    let widget = Paragraph::new(score)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, right);
}

fn render_timer(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let limit = session.config().time_limit;
    let remaining = session.remaining_time();
    let ratio = if limit > 0 {
        (f64::from(remaining) / f64::from(limit)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let widget = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        )
        .gauge_style(Style::default().fg(urgency_color(session.urgency())))
        .ratio(ratio)
        .label(format!("{}", remaining));
    frame.render_widget(widget, area);
}

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Normal => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Danger => Color::Red,
    }
}

fn render_question_text(frame: &mut Frame, area: Rect, category: &str, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .title(format!(" {} ", category))
                .title_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[DisplayedOption],
    cursor: usize,
    selected: Option<Answer>,
    correct_index: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (position, option) in options.iter().enumerate() {
        let style = option_style(option, position == cursor, selected, correct_index);
        let marker = if selected.is_none() && position == cursor {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", position + 1), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Before an answer the cursor is highlighted; afterwards the correct
/// option turns green and a wrong pick turns red.
fn option_style(
    option: &DisplayedOption,
    under_cursor: bool,
    selected: Option<Answer>,
    correct_index: usize,
) -> Style {
    let Some(answer) = selected else {
        return if under_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
    };

    if option.original_index == correct_index {
        Style::default().fg(Color::Green).bold()
    } else if answer.chosen_index() == Some(option.original_index) {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_controls(frame: &mut Frame, area: Rect, selected: Option<Answer>, correct_index: usize) {
    let line = match selected {
        None => Line::from("j/k navigate  ·  enter select  ·  1-9 answer  ·  q quit".fg(Color::DarkGray)),
        Some(answer) => {
            let (verdict, color) = match answer {
                Answer::TimedOut => ("Time's up!", Color::Yellow),
                Answer::Chosen(index) if index == correct_index => ("Correct!", Color::Green),
                Answer::Chosen(_) => ("Wrong!", Color::Red),
            };
            Line::from(vec![
                Span::styled(verdict, Style::default().fg(color).bold()),
                Span::styled("  ·  n next  ·  q quit", Style::default().fg(Color::DarkGray)),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
