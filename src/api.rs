//! Transport-independent API operations.
//!
//! The HTTP router and the raw dispatcher both call these functions and
//! only differ in how they turn the results into responses.

use serde::Deserialize;
use serde_json::Value;

use crate::data::AssignmentStore;
use crate::error::ApiError;
use crate::grading::grade;
use crate::models::{Answer, Assignment, AssignmentSummary};
use crate::protocol::SubmissionResult;

/// Summaries of every stored assignment.
pub async fn list_assignments(store: &AssignmentStore) -> Result<Vec<AssignmentSummary>, ApiError> {
    let summaries = store.list().await?;
    tracing::debug!(count = summaries.len(), "listed assignments");
    Ok(summaries)
}

/// The full assignment document.
pub async fn get_assignment(store: &AssignmentStore, id: &str) -> Result<Assignment, ApiError> {
    store.load(id).await
}

/// Grade a submission.
///
/// `body` is the decoded request body; it must be an object with an
/// `answers` array. A single malformed answer fails the whole submission.
pub async fn submit(
    store: &AssignmentStore,
    id: &str,
    body: &Value,
) -> Result<SubmissionResult, ApiError> {
    let answers = parse_answers(body)?;
    let assignment = store.load(id).await?;
    let result = grade(&assignment, &answers);

    tracing::info!(
        assignment = id,
        total = result.total_questions,
        correct = result.correct_answers,
        score = result.score_percent,
        "graded submission"
    );

    Ok(result)
}

/// Extract the answer list from a submission body.
pub fn parse_answers(body: &Value) -> Result<Vec<Answer>, ApiError> {
    let entries = body
        .get("answers")
        .ok_or_else(|| ApiError::BadRequest("missing `answers` field".to_string()))?
        .as_array()
        .ok_or_else(|| ApiError::BadRequest("`answers` must be a list".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Answer::deserialize(entry).map_err(|err| {
                ApiError::MalformedData(format!("answer {} is malformed: {}", index, err))
            })
        })
        .collect()
}
