//! Request and response bodies of the HTTP API.
//!
//! All bodies are JSON with camelCase field names.

use serde::{Deserialize, Serialize};

use crate::models::Answer;

/// Body of `POST /assignments/{id}/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<Answer>,
}

/// Graded submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percent: f64,
    pub detailed_results: Vec<AnswerResult>,
}

/// Result for a single submitted answer.
///
/// Answers that reference an unknown question carry `correct_answer: None`
/// and empty question text and options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub question_id: i64,
    pub selected_option: String,
    pub is_correct: bool,
    pub correct_answer: Option<String>,
    pub question_text: String,
    pub options: Vec<String>,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serialization() {
        let result = SubmissionResult {
            total_questions: 2,
            correct_answers: 0,
            score_percent: 0.0,
            detailed_results: vec![AnswerResult {
                question_id: 9,
                selected_option: "X".to_string(),
                is_correct: false,
                correct_answer: None,
                question_text: String::new(),
                options: Vec::new(),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalQuestions"], 2);
        assert_eq!(json["scorePercent"], 0.0);
        assert!(json["detailedResults"][0]["correctAnswer"].is_null());
        assert_eq!(json["detailedResults"][0]["isCorrect"], false);
    }

    #[test]
    fn test_submit_request_deserialization() {
        let json = r#"{"answers":[{"questionId":1,"selectedOption":"A"}]}"#;
        let request: SubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.answers, vec![Answer::new(1, "A")]);
    }
}
