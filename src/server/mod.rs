//! Server side: the HTTP router and the function-style dispatcher.

mod dispatch;
mod handlers;
mod layers;
mod server;
mod state;

pub use dispatch::{dispatch, ApiResponse};
pub use server::{router, run};
pub use state::AppState;
