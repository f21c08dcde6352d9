//! Client state management.
//!
//! Key handling never performs I/O: it returns a [`Command`] for the
//! background worker, whose outcome comes back as an [`ApiEvent`].

use crossterm::event::KeyCode;

use crate::models::{Answer, Assignment, AssignmentSummary};
use crate::progress::ProgressStore;
use crate::protocol::SubmissionResult;

/// Work for the background API task.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchAssignments,
    FetchAssignment(String),
    Submit { id: String, answers: Vec<Answer> },
}

/// Outcome of a [`Command`]. Errors are already rendered as messages.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    Assignments(Result<Vec<AssignmentSummary>, String>),
    Assignment(Result<Assignment, String>),
    Submitted {
        id: String,
        result: Result<SubmissionResult, String>,
    },
}

/// Current state of the client.
#[derive(Debug, Clone)]
pub enum ClientState {
    /// Waiting for the server.
    Loading { message: String },

    /// Picking an assignment.
    List {
        selected: usize,
        error: Option<String>,
    },

    /// Answering an assignment's questions.
    Quiz {
        assignment: Assignment,
        current_index: usize,
        selected_option: usize,
        answers: Vec<Answer>,
        error: Option<String>,
    },

    /// Waiting for a submission to be graded.
    Submitting {
        assignment: Assignment,
        answers: Vec<Answer>,
    },

    /// Viewing a graded submission.
    Results {
        title: String,
        result: SubmissionResult,
        notice: Option<String>,
        scroll: usize,
    },

    /// The assignment list could not be loaded.
    Failed { message: String },
}

impl Default for ClientState {
    fn default() -> Self {
        Self::loading("Loading assignments...")
    }
}

impl ClientState {
    fn loading(message: &str) -> Self {
        Self::Loading {
            message: message.to_string(),
        }
    }
}

/// Client application state.
pub struct ClientApp {
    /// Current state.
    pub state: ClientState,
    /// Server base URL (for display).
    pub server_url: String,
    /// Whether the client should quit.
    pub should_quit: bool,
    assignments: Vec<AssignmentSummary>,
    /// List cursor, kept while an assignment is loading.
    last_selected: usize,
    progress: Box<dyn ProgressStore + Send>,
}

impl ClientApp {
    pub fn new(server_url: String, progress: Box<dyn ProgressStore + Send>) -> Self {
        Self {
            state: ClientState::default(),
            server_url,
            should_quit: false,
            assignments: Vec::new(),
            last_selected: 0,
            progress,
        }
    }

    pub fn assignments(&self) -> &[AssignmentSummary] {
        &self.assignments
    }

    pub fn progress(&self) -> &dyn ProgressStore {
        self.progress.as_ref()
    }

    /// Apply the outcome of a background request.
    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Assignments(Ok(assignments)) => {
                self.assignments = assignments;
                let selected = match &self.state {
                    ClientState::List { selected, .. } => *selected,
                    _ => self.last_selected,
                };
                self.state = ClientState::List {
                    selected: selected.min(self.assignments.len().saturating_sub(1)),
                    error: None,
                };
            }
            ApiEvent::Assignments(Err(message)) => {
                self.state = ClientState::Failed { message };
            }
            ApiEvent::Assignment(Ok(assignment)) => {
                self.state = ClientState::Quiz {
                    assignment,
                    current_index: 0,
                    selected_option: 0,
                    answers: Vec::new(),
                    error: None,
                };
            }
            ApiEvent::Assignment(Err(message)) => {
                self.back_to_list(Some(message));
            }
            ApiEvent::Submitted { id, result } => self.apply_submission(id, result),
        }
    }

    fn apply_submission(&mut self, id: String, result: Result<SubmissionResult, String>) {
        if !matches!(self.state, ClientState::Submitting { .. }) {
            return;
        }
        let ClientState::Submitting {
            assignment,
            answers,
        } = std::mem::take(&mut self.state)
        else {
            return;
        };

        match result {
            Ok(result) => {
                let notice = self
                    .progress
                    .set(&id, result.score_percent)
                    .err()
                    .map(|err| format!("Progress not saved: {}", err));
                self.state = ClientState::Results {
                    title: assignment.title,
                    result,
                    notice,
                    scroll: 0,
                };
            }
            Err(message) => {
                let current_index = assignment.questions.len().saturating_sub(1);
                self.state = ClientState::Quiz {
                    assignment,
                    current_index,
                    selected_option: 0,
                    answers,
                    error: Some(message),
                };
                self.sync_selection();
            }
        }
    }

    /// Handle a key press. Returns work for the API task, if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match self.state {
            ClientState::Loading { .. } | ClientState::Submitting { .. } => {
                if is_quit(key) {
                    self.should_quit = true;
                }
                None
            }
            ClientState::List { .. } => self.handle_list_key(key),
            ClientState::Quiz { .. } => self.handle_quiz_key(key),
            ClientState::Results { .. } => self.handle_results_key(key),
            ClientState::Failed { .. } => match key {
                KeyCode::Enter | KeyCode::Char('r') => {
                    self.state = ClientState::default();
                    Some(Command::FetchAssignments)
                }
                _ => {
                    if is_quit(key) || key == KeyCode::Esc {
                        self.should_quit = true;
                    }
                    None
                }
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) -> Option<Command> {
        let count = self.assignments.len();
        let ClientState::List { selected, error } = &mut self.state else {
            return None;
        };

        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    *selected = (*selected + 1) % count;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if count > 0 {
                    *selected = (*selected + count - 1) % count;
                }
                None
            }
            KeyCode::Enter => {
                let id = self.assignments.get(*selected)?.id.clone();
                self.last_selected = *selected;
                self.state = ClientState::loading("Loading assignment...");
                Some(Command::FetchAssignment(id))
            }
            KeyCode::Char('r') => {
                *error = None;
                Some(Command::FetchAssignments)
            }
            KeyCode::Char('x') => {
                *error = self
                    .progress
                    .reset()
                    .err()
                    .map(|err| format!("Could not reset progress: {}", err));
                None
            }
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ => {
                if is_quit(key) {
                    self.should_quit = true;
                }
                None
            }
        }
    }

    fn handle_quiz_key(&mut self, key: KeyCode) -> Option<Command> {
        let ClientState::Quiz {
            assignment,
            current_index,
            selected_option,
            answers,
            error,
        } = &mut self.state
        else {
            return None;
        };

        let option_count = assignment
            .questions
            .get(*current_index)
            .map_or(0, |q| q.options.len());

        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                if option_count > 0 {
                    *selected_option = (*selected_option + 1) % option_count;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if option_count > 0 {
                    *selected_option = (*selected_option + option_count - 1) % option_count;
                }
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if *current_index > 0 {
                    *current_index -= 1;
                    self.sync_selection();
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                *error = None;
                if let Some(question) = assignment.questions.get(*current_index)
                    && let Some(option) = question.options.get(*selected_option)
                {
                    let answer = Answer::new(question.id, option.clone());
                    match answers.iter_mut().find(|a| a.question_id == question.id) {
                        Some(existing) => *existing = answer,
                        None => answers.push(answer),
                    }
                }

                if *current_index + 1 < assignment.questions.len() {
                    *current_index += 1;
                    self.sync_selection();
                    return None;
                }

                let ClientState::Quiz {
                    assignment,
                    answers,
                    ..
                } = std::mem::take(&mut self.state)
                else {
                    return None;
                };
                let command = Command::Submit {
                    id: assignment.id.clone(),
                    answers: answers.clone(),
                };
                self.state = ClientState::Submitting {
                    assignment,
                    answers,
                };
                Some(command)
            }
            KeyCode::Esc => {
                self.back_to_list(None);
                None
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_results_down();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_results_up();
                None
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => {
                self.back_to_list(None);
                None
            }
            _ => {
                if is_quit(key) {
                    self.should_quit = true;
                }
                None
            }
        }
    }

    fn back_to_list(&mut self, error: Option<String>) {
        let selected = match &self.state {
            ClientState::List { selected, .. } => *selected,
            ClientState::Quiz { assignment, .. } | ClientState::Submitting { assignment, .. } => self
                .assignments
                .iter()
                .position(|a| a.id == assignment.id)
                .unwrap_or(self.last_selected),
            _ => self.last_selected,
        };
        let selected = selected.min(self.assignments.len().saturating_sub(1));
        self.state = ClientState::List { selected, error };
    }

    /// Point the option cursor at the recorded answer for the current
    /// question, or the first option.
    fn sync_selection(&mut self) {
        if let ClientState::Quiz {
            assignment,
            current_index,
            selected_option,
            answers,
            ..
        } = &mut self.state
        {
            *selected_option = assignment
                .questions
                .get(*current_index)
                .and_then(|q| {
                    let answer = answers.iter().find(|a| a.question_id == q.id)?;
                    q.options.iter().position(|o| *o == answer.selected_option)
                })
                .unwrap_or(0);
        }
    }

    fn scroll_results_down(&mut self) {
        if let ClientState::Results { scroll, result, .. } = &mut self.state {
            let max_scroll = result.detailed_results.len().saturating_sub(1);
            *scroll = (*scroll + 1).min(max_scroll);
        }
    }

    fn scroll_results_up(&mut self) {
        if let ClientState::Results { scroll, .. } = &mut self.state {
            *scroll = scroll.saturating_sub(1);
        }
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::grade;
    use crate::models::Question;
    use crate::progress::MemoryProgress;

    fn app() -> ClientApp {
        ClientApp::new(
            "http://localhost:3000".to_string(),
            Box::new(MemoryProgress::new()),
        )
    }

    fn summaries() -> Vec<AssignmentSummary> {
        ["a1", "a2"]
            .iter()
            .map(|id| AssignmentSummary {
                id: id.to_string(),
                title: format!("Assignment {}", id),
                due_date: None,
                submitted_on: None,
            })
            .collect()
    }

    fn assignment() -> Assignment {
        Assignment {
            id: "a2".to_string(),
            title: "Assignment a2".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    text: "Q1".to_string(),
                    options: vec!["A".to_string(), "B".to_string()],
                    correct_answer: "A".to_string(),
                },
                Question {
                    id: 2,
                    text: "Q2".to_string(),
                    options: vec!["C".to_string(), "D".to_string()],
                    correct_answer: "D".to_string(),
                },
            ],
            due_date: None,
            submitted_on: None,
        }
    }

    #[test]
    fn test_open_assignment_from_list() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        assert!(matches!(app.state, ClientState::List { selected: 0, .. }));

        assert_eq!(app.handle_key(KeyCode::Char('j')), None);
        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(Command::FetchAssignment("a2".to_string()))
        );
        assert!(matches!(app.state, ClientState::Loading { .. }));
    }

    #[test]
    fn test_list_wraps_selection() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        app.handle_key(KeyCode::Up);
        assert!(matches!(app.state, ClientState::List { selected: 1, .. }));
    }

    #[test]
    fn test_answer_and_submit() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        app.apply(ApiEvent::Assignment(Ok(assignment())));

        // Q1: pick "A"; Q2: pick "C".
        assert_eq!(app.handle_key(KeyCode::Enter), None);
        let command = app.handle_key(KeyCode::Enter);
        assert_eq!(
            command,
            Some(Command::Submit {
                id: "a2".to_string(),
                answers: vec![Answer::new(1, "A"), Answer::new(2, "C")],
            })
        );
        assert!(matches!(app.state, ClientState::Submitting { .. }));

        let result = grade(&assignment(), &[Answer::new(1, "A"), Answer::new(2, "C")]);
        app.apply(ApiEvent::Submitted {
            id: "a2".to_string(),
            result: Ok(result),
        });

        assert!(matches!(app.state, ClientState::Results { notice: None, .. }));
        assert_eq!(app.progress().get("a2"), Some(50.0));
        assert!(!app.progress().is_completed("a1"));
    }

    #[test]
    fn test_reanswer_replaces_previous_answer() {
        let mut app = app();
        app.apply(ApiEvent::Assignment(Ok(assignment())));

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Left);
        assert!(matches!(
            app.state,
            ClientState::Quiz { current_index: 0, selected_option: 0, .. }
        ));

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        let ClientState::Quiz { answers, current_index, .. } = &app.state else {
            panic!("expected quiz state");
        };
        assert_eq!(*current_index, 1);
        assert_eq!(answers, &vec![Answer::new(1, "B")]);
    }

    #[test]
    fn test_failed_submission_returns_to_quiz() {
        let mut app = app();
        app.apply(ApiEvent::Assignment(Ok(assignment())));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        app.apply(ApiEvent::Submitted {
            id: "a2".to_string(),
            result: Err("server down".to_string()),
        });

        let ClientState::Quiz { current_index, selected_option, answers, error, .. } = &app.state
        else {
            panic!("expected quiz state");
        };
        assert_eq!(*current_index, 1);
        assert_eq!(*selected_option, 1);
        assert_eq!(answers.len(), 2);
        assert_eq!(error.as_deref(), Some("server down"));
    }

    #[test]
    fn test_empty_assignment_submits_immediately() {
        let mut app = app();
        let mut empty = assignment();
        empty.questions.clear();
        app.apply(ApiEvent::Assignment(Ok(empty)));

        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(Command::Submit {
                id: "a2".to_string(),
                answers: Vec::new(),
            })
        );
    }

    #[test]
    fn test_missing_assignment_shows_error_in_list() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        app.handle_key(KeyCode::Enter);
        app.apply(ApiEvent::Assignment(Err("Assignment not found (404)".to_string())));

        assert!(matches!(
            &app.state,
            ClientState::List { error: Some(msg), .. } if msg.contains("404")
        ));
    }

    #[test]
    fn test_failed_fetch_keeps_list_cursor() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert!(matches!(app.state, ClientState::Loading { .. }));

        app.apply(ApiEvent::Assignment(Err("Assignment not found (404)".to_string())));
        assert!(matches!(app.state, ClientState::List { selected: 1, .. }));
    }

    #[test]
    fn test_reset_progress() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Ok(summaries())));
        app.progress.set("a1", 100.0).unwrap();

        app.handle_key(KeyCode::Char('x'));
        assert!(!app.progress().is_completed("a1"));
    }

    #[test]
    fn test_failed_listing_retries() {
        let mut app = app();
        app.apply(ApiEvent::Assignments(Err("connection refused".to_string())));
        assert!(matches!(app.state, ClientState::Failed { .. }));

        assert_eq!(app.handle_key(KeyCode::Enter), Some(Command::FetchAssignments));
        assert!(app.handle_key(KeyCode::Char('q')).is_none());
        assert!(app.should_quit);
    }
}
