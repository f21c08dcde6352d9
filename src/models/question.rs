use serde::{Deserialize, Serialize};

/// A multiple-choice question as stored in an assignment file.
///
/// `correct_answer` is expected to be one of `options`, but nothing checks
/// that when the file is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// One answer from a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub selected_option: String,
}

impl Answer {
    pub fn new(question_id: i64, selected_option: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_option: selected_option.into(),
        }
    }
}
