//! Terminal client for the assignment API.

mod api;
mod client;
mod state;
mod ui;

pub use api::{ApiClient, ClientError};
pub use client::{execute, run};
pub use state::{ApiEvent, ClientApp, ClientState, Command};
