//! Question screen for the client.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::client::state::{ClientApp, ClientState};
use crate::models::{Answer, Question};

/// Render the current question.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp) {
    let ClientState::Quiz {
        assignment,
        current_index,
        selected_option,
        answers,
        error,
    } = &app.state
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Progress
        Constraint::Length(7), // Question text
        Constraint::Min(6),    // Options
        Constraint::Length(1), // Error
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    let Some(question) = assignment.questions.get(*current_index) else {
        let empty = Paragraph::new("This assignment has no questions. Press Enter to submit.")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(empty, chunks[1]);
        render_controls(frame, chunks[4], true);
        return;
    };

    let total = assignment.questions.len();
    render_progress(frame, chunks[0], &assignment.title, *current_index, total);
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], question, answers, *selected_option);

    if let Some(message) = error {
        let widget = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, chunks[3]);
    }

    render_controls(frame, chunks[4], *current_index + 1 == total);
}

fn render_progress(frame: &mut Frame, area: Rect, title: &str, current: usize, total: usize) {
    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(
            format!("Question {} of {}", current + 1, total),
            Style::default().fg(Color::Cyan).bold(),
        )),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answers: &[Answer],
    selected: usize,
) {
    let recorded = answers
        .iter()
        .find(|a| a.question_id == question.id)
        .map(|a| a.selected_option.as_str());

    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let marker = if recorded == Some(opt.as_str()) { " *" } else { "" };

            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{}) ", option_label(i)), style),
                Span::styled(opt.clone(), style),
                Span::styled(marker, Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, last: bool) {
    let action = if last { "Enter submit" } else { "Enter next" };
    let widget = Paragraph::new(format!(
        "j/k select  ·  {}  ·  h previous  ·  Esc back  ·  q quit",
        action
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}

/// `A`, `B`, ... `Z`, then numbers for unusually long option lists.
fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}
