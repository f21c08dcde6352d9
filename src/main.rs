use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiz_assignments::progress::JsonFileProgress;
use quiz_assignments::{client, server, AssignmentStore};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Serve the assignment API over HTTP
    Serve {
        /// The address to bind to
        #[arg(short, long, env = "QUIZ_ADDRESS", default_value = "127.0.0.1:3000")]
        address: SocketAddr,

        /// Directory holding one `{id}.json` file per assignment
        #[arg(long, env = "ASSIGNMENTS_DIR", default_value = "data/assignments")]
        assignments: PathBuf,
    },

    /// Handle a single request without a server and print the response
    Invoke {
        /// HTTP method, e.g. GET or POST
        method: String,

        /// Request path, e.g. /assignments/rust-basics
        path: String,

        /// JSON request body
        #[arg(short, long)]
        body: Option<String>,

        /// Directory holding one `{id}.json` file per assignment
        #[arg(long, env = "ASSIGNMENTS_DIR", default_value = "data/assignments")]
        assignments: PathBuf,
    },

    /// Take assignments in the terminal
    Client {
        /// Base URL of the assignment API
        #[arg(short, long, env = "QUIZ_URL", default_value = "http://127.0.0.1:3000")]
        url: String,

        /// File recording completed assignments and scores
        #[arg(short, long, env = "QUIZ_PROGRESS", default_value = ".quiz-progress.json")]
        progress: PathBuf,
    },
}

/// Logs go to stderr so `invoke` output on stdout stays parseable.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quiz_assignments=info,tower=warn".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Cmd::Serve {
            address,
            assignments,
        } => {
            init_tracing();
            server::run(address, AssignmentStore::new(assignments)).await?;
        }
        Cmd::Invoke {
            method,
            path,
            body,
            assignments,
        } => {
            init_tracing();
            let store = AssignmentStore::new(assignments);
            let response = server::dispatch(&store, &method, &path, body.as_deref()).await;

            println!("{}", response.status);
            for (name, value) in response.headers() {
                println!("{}: {}", name, value);
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&response.body)?);
        }
        Cmd::Client { url, progress } => {
            // No subscriber here: the UI owns the terminal.
            let progress = JsonFileProgress::open(progress)?;
            client::run(url, Box::new(progress)).await?;
        }
    }

    Ok(())
}
