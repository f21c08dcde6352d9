use std::io;
use std::path::{Path, PathBuf};

use futures_util::future::join_all;
use tokio::fs;

use crate::error::ApiError;
use crate::models::{Assignment, AssignmentSummary};

const ASSIGNMENT_EXTENSION: &str = "json";

/// Reads assignment documents from a directory of `{id}.json` files.
///
/// Nothing is cached: every call goes back to disk.
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    dir: PathBuf,
}

impl AssignmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load and parse the assignment with the given id.
    pub async fn load(&self, id: &str) -> Result<Assignment, ApiError> {
        if !is_valid_id(id) {
            tracing::debug!(id, "rejecting assignment id");
            return Err(ApiError::NotFound(id.to_string()));
        }

        let path = self.dir.join(format!("{}.{}", id, ASSIGNMENT_EXTENSION));
        read_assignment(&path, id).await
    }

    /// Summaries of every readable assignment, sorted by id.
    ///
    /// Files that fail to load are skipped with a warning.
    pub async fn list(&self) -> Result<Vec<AssignmentSummary>, ApiError> {
        let mut entries = fs::read_dir(&self.dir).await.map_err(|err| {
            ApiError::Unavailable(format!("failed to read {}: {}", self.dir.display(), err))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|err| {
            ApiError::Unavailable(format!("failed to read {}: {}", self.dir.display(), err))
        })? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == ASSIGNMENT_EXTENSION) {
                paths.push(path);
            }
        }

        let loads = paths.iter().map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            async move { read_assignment(path, &stem).await }
        });

        let mut summaries: Vec<AssignmentSummary> = join_all(loads)
            .await
            .into_iter()
            .zip(paths.iter())
            .filter_map(|(result, path)| match result {
                Ok(assignment) => Some(assignment.summary()),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping assignment");
                    None
                }
            })
            .collect();

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

async fn read_assignment(path: &Path, id: &str) -> Result<Assignment, ApiError> {
    let content = fs::read_to_string(path).await.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ApiError::NotFound(id.to_string()),
        _ => ApiError::Unavailable(format!("failed to read {}: {}", path.display(), err)),
    })?;

    serde_json::from_str(&content)
        .map_err(|err| ApiError::MalformedData(format!("assignment `{}` is malformed: {}", id, err)))
}

/// Ids map straight onto file names, so only a conservative character set
/// is accepted and nothing may escape the directory.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
