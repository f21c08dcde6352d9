//! Results screen for the client.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::client::state::{ClientApp, ClientState};
use crate::protocol::{AnswerResult, SubmissionResult};

const QUESTION_PREVIEW_LENGTH: usize = 60;

/// Render the results screen.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp) {
    let ClientState::Results {
        title,
        result,
        notice,
        scroll,
    } = &app.state
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7), // Score summary
        Constraint::Min(8),    // Answers breakdown
        Constraint::Length(1), // Notice
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], title, result);
    render_answers(frame, chunks[1], &result.detailed_results, *scroll);

    if let Some(notice) = notice {
        let widget = Paragraph::new(notice.as_str())
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, chunks[2]);
    }

    let controls = Paragraph::new("j/k scroll  ·  Enter back to assignments  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, title: &str, result: &SubmissionResult) {
    let percentage = result.score_percent;

    let grade_color = match percentage as u32 {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(title, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.1}%)",
                result.correct_answers, result.total_questions, percentage
            ),
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

fn render_answers(frame: &mut Frame, area: Rect, answers: &[AnswerResult], scroll: usize) {
    let lines: Vec<Line> = answers
        .iter()
        .enumerate()
        .flat_map(|(index, answer)| answer_lines(index, answer))
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Your Answers ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((u16::try_from(scroll * 2).unwrap_or(u16::MAX), 0));

    frame.render_widget(widget, area);
}

/// Two lines per answer: the question, then the chosen and correct options.
fn answer_lines(index: usize, answer: &AnswerResult) -> [Line<'static>; 2] {
    let (symbol, color) = if answer.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let question = if answer.question_text.is_empty() {
        format!("(unknown question {})", answer.question_id)
    } else {
        truncate_question(&answer.question_text)
    };

    let mut detail = vec![
        Span::raw("       "),
        Span::styled("you: ", Style::default().fg(Color::DarkGray)),
        Span::styled(answer.selected_option.clone(), Style::default().fg(color)),
    ];
    if !answer.is_correct
        && let Some(correct) = &answer.correct_answer
    {
        detail.push(Span::styled("  correct: ", Style::default().fg(Color::DarkGray)));
        detail.push(Span::styled(correct.clone(), Style::default().fg(Color::Green)));
    }

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(question, Style::default().fg(Color::Gray)),
        ]),
        Line::from(detail),
    ]
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
