//! # quiz-assignments
//!
//! Multiple-choice assignments served over a small JSON API, graded on
//! submission, with a terminal client for taking them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_assignments::{api, AssignmentStore};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), quiz_assignments::ApiError> {
//! let store = AssignmentStore::new("data/assignments");
//!
//! let body = json!({ "answers": [{ "questionId": 1, "selectedOption": "A" }] });
//! let result = api::submit(&store, "rust-basics", &body).await?;
//! println!("{:.1}%", result.score_percent);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
mod data;
mod error;
pub mod grading;
mod models;
pub mod progress;
pub mod protocol;
pub mod server;
pub mod terminal;

pub use data::AssignmentStore;
pub use error::ApiError;
pub use models::{Answer, Assignment, AssignmentSummary, Question};
