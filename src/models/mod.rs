//! Assignment documents and submitted answers.

mod assignment;
mod question;

pub use assignment::{Assignment, AssignmentSummary};
pub use question::{Answer, Question};
