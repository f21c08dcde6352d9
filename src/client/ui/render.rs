//! Main client UI renderer.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::client::state::{ClientApp, ClientState};

use super::{list, quiz, results};

pub(super) const APP_TITLE: &str = "ASSIGNMENTS";

/// Render the client UI based on current state.
pub fn render(frame: &mut Frame, app: &ClientApp) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.state {
        ClientState::Loading { message } => render_message(frame, area, message, Color::Yellow, ""),
        ClientState::List { .. } => list::render(frame, area, app),
        ClientState::Quiz { .. } => quiz::render(frame, area, app),
        ClientState::Submitting { .. } => {
            render_message(frame, area, "Submitting answers...", Color::Yellow, "")
        }
        ClientState::Results { .. } => results::render(frame, area, app),
        ClientState::Failed { message } => render_message(
            frame,
            area,
            &format!("Could not reach {}: {}", app.server_url, message),
            Color::Red,
            "[Enter] retry  ·  [Q] quit",
        ),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color, hint: &str) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(8),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
