//! Wire types shared by the server and the client.

mod messages;

pub use messages::{AnswerResult, ErrorBody, SubmissionResult, SubmitRequest};
