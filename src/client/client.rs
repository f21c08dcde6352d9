//! Terminal client event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::progress::ProgressStore;
use crate::terminal::TerminalSession;

use super::api::ApiClient;
use super::state::{ApiEvent, ClientApp, Command};
use super::ui;

const TICK: Duration = Duration::from_millis(50);

/// Run the terminal client against the server at `server_url`.
pub async fn run(server_url: String, progress: Box<dyn ProgressStore + Send>) -> io::Result<()> {
    let api = ApiClient::new(server_url.clone());
    let mut app = ClientApp::new(server_url, progress);

    let (command_tx, mut command_rx) = mpsc::unbounded_channel::<Command>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ApiEvent>();

    // Requests run here so the UI keeps drawing while they are in flight.
    let worker = tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            let event = execute(&api, command).await;
            if event_tx.send(event).is_err() {
                break;
            }
        }
    });

    let _ = command_tx.send(Command::FetchAssignments);

    let result = run_tui(&mut app, &command_tx, &mut event_rx);
    worker.abort();
    result
}

/// Perform one API call.
pub async fn execute(api: &ApiClient, command: Command) -> ApiEvent {
    match command {
        Command::FetchAssignments => {
            ApiEvent::Assignments(api.assignments().await.map_err(|e| e.to_string()))
        }
        Command::FetchAssignment(id) => {
            ApiEvent::Assignment(api.assignment(&id).await.map_err(|e| e.to_string()))
        }
        Command::Submit { id, answers } => {
            let result = api.submit(&id, &answers).await.map_err(|e| e.to_string());
            ApiEvent::Submitted { id, result }
        }
    }
}

fn run_tui(
    app: &mut ClientApp,
    commands: &mpsc::UnboundedSender<Command>,
    events: &mut mpsc::UnboundedReceiver<ApiEvent>,
) -> io::Result<()> {
    let mut terminal = TerminalSession::start()?;

    while !app.should_quit {
        while let Ok(api_event) = events.try_recv() {
            app.apply(api_event);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = app.handle_key(key.code)
            && commands.send(command).is_err()
        {
            break;
        }
    }

    Ok(())
}
