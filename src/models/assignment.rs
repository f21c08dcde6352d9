use serde::{Deserialize, Serialize};

use super::Question;

/// An assignment document, one per `{id}.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<String>,
}

impl Assignment {
    /// Find a question by id. The first match wins if ids repeat.
    pub fn question(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn summary(&self) -> AssignmentSummary {
        AssignmentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            due_date: self.due_date.clone(),
            submitted_on: self.submitted_on.clone(),
        }
    }
}

/// The listing projection of an [`Assignment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<String>,
}
