//! Assignment picker.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::client::state::{ClientApp, ClientState};

use super::render::APP_TITLE;

/// Render the assignment list.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp) {
    let ClientState::List { selected, error } = &app.state else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(5),    // Assignments
        Constraint::Length(2), // Cumulative score / error
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(APP_TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(title, chunks[0]);

    render_assignments(frame, chunks[1], app, *selected);
    render_status(frame, chunks[2], app, error.as_deref());

    let controls = Paragraph::new("j/k select  ·  Enter open  ·  r refresh  ·  x reset progress  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_assignments(frame: &mut Frame, area: Rect, app: &ClientApp, selected: usize) {
    let progress = app.progress();

    let lines: Vec<Line> = if app.assignments().is_empty() {
        vec![Line::from(Span::styled(
            "No assignments available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.assignments()
            .iter()
            .enumerate()
            .map(|(i, summary)| {
                let is_selected = i == selected;
                let style = if is_selected {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::White)
                };

                let status = match progress.get(&summary.id) {
                    Some(score) => Span::styled(
                        format!("  done {:.1}%", score),
                        Style::default().fg(Color::Green),
                    ),
                    None => Span::raw(""),
                };

                let due = summary
                    .due_date
                    .as_deref()
                    .map(|d| Span::styled(format!("  due {}", d), Style::default().fg(Color::DarkGray)))
                    .unwrap_or_else(|| Span::raw(""));

                Line::from(vec![
                    Span::styled(if is_selected { "> " } else { "  " }, style),
                    Span::styled(summary.title.clone(), style),
                    due,
                    status,
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Assignments ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &ClientApp, error: Option<&str>) {
    let line = match error {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => {
            let progress = app.progress();
            let completed = progress.scores().len();
            Line::from(Span::styled(
                format!(
                    "Completed {}  ·  Average score {:.1}%",
                    completed,
                    progress.cumulative_score()
                ),
                Style::default().fg(Color::Gray),
            ))
        }
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
