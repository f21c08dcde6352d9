//! Client-side progress: which assignments were completed and with what
//! score.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ProgressError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] io::Error),
    #[error("progress file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage for per-assignment scores, keyed by assignment id.
///
/// An assignment counts as completed once a score is recorded for it.
pub trait ProgressStore {
    /// Recorded score, if the assignment was completed.
    fn get(&self, assignment_id: &str) -> Option<f64>;

    /// Record a score, replacing any earlier one.
    fn set(&mut self, assignment_id: &str, score_percent: f64) -> Result<(), ProgressError>;

    /// Forget a single assignment.
    fn clear(&mut self, assignment_id: &str) -> Result<(), ProgressError>;

    /// Forget everything.
    fn reset(&mut self) -> Result<(), ProgressError>;

    fn scores(&self) -> &BTreeMap<String, f64>;

    fn is_completed(&self, assignment_id: &str) -> bool {
        self.get(assignment_id).is_some()
    }

    /// Mean of all recorded scores, `0.0` when nothing is recorded.
    fn cumulative_score(&self) -> f64 {
        let scores = self.scores();
        if scores.is_empty() {
            return 0.0;
        }
        scores.values().sum::<f64>() / scores.len() as f64
    }
}

/// Progress held in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryProgress {
    scores: BTreeMap<String, f64>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgress {
    fn get(&self, assignment_id: &str) -> Option<f64> {
        self.scores.get(assignment_id).copied()
    }

    fn set(&mut self, assignment_id: &str, score_percent: f64) -> Result<(), ProgressError> {
        self.scores.insert(assignment_id.to_string(), score_percent);
        Ok(())
    }

    fn clear(&mut self, assignment_id: &str) -> Result<(), ProgressError> {
        self.scores.remove(assignment_id);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ProgressError> {
        self.scores.clear();
        Ok(())
    }

    fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    scores: BTreeMap<String, f64>,
}

/// Progress persisted as a JSON file, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileProgress {
    path: PathBuf,
    data: ProgressFile,
}

impl JsonFileProgress {
    /// Open the file at `path`. A missing file means no progress yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProgressError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => ProgressFile::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, data })
    }

    fn save(&self) -> Result<(), ProgressError> {
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ProgressStore for JsonFileProgress {
    fn get(&self, assignment_id: &str) -> Option<f64> {
        self.data.scores.get(assignment_id).copied()
    }

    fn set(&mut self, assignment_id: &str, score_percent: f64) -> Result<(), ProgressError> {
        self.data
            .scores
            .insert(assignment_id.to_string(), score_percent);
        self.save()
    }

    fn clear(&mut self, assignment_id: &str) -> Result<(), ProgressError> {
        if self.data.scores.remove(assignment_id).is_some() {
            self.save()?;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ProgressError> {
        self.data.scores.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn scores(&self) -> &BTreeMap<String, f64> {
        &self.data.scores
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn temp_path() -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "quiz_progress_test_{}_{}.json",
            std::process::id(),
            id
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_memory_progress() {
        let mut progress = MemoryProgress::new();
        assert!(!progress.is_completed("a1"));
        assert_eq!(progress.cumulative_score(), 0.0);

        progress.set("a1", 50.0).unwrap();
        progress.set("a2", 100.0).unwrap();
        assert!(progress.is_completed("a1"));
        assert_eq!(progress.get("a2"), Some(100.0));
        assert_eq!(progress.cumulative_score(), 75.0);

        progress.set("a1", 0.0).unwrap();
        assert_eq!(progress.get("a1"), Some(0.0));

        progress.clear("a2").unwrap();
        assert!(!progress.is_completed("a2"));

        progress.reset().unwrap();
        assert!(progress.scores().is_empty());
    }

    #[test]
    fn test_file_progress_persists() {
        let path = temp_path();

        let mut progress = JsonFileProgress::open(&path).unwrap();
        assert!(progress.scores().is_empty());
        progress.set("a1", 50.0).unwrap();
        progress.set("a2", 25.0).unwrap();
        progress.clear("a2").unwrap();

        let reopened = JsonFileProgress::open(&path).unwrap();
        assert_eq!(reopened.get("a1"), Some(50.0));
        assert_eq!(reopened.get("a2"), None);
    }

    #[test]
    fn test_file_progress_reset_removes_file() {
        let path = temp_path();

        let mut progress = JsonFileProgress::open(&path).unwrap();
        progress.set("a1", 50.0).unwrap();
        assert!(path.exists());

        progress.reset().unwrap();
        assert!(!path.exists());
        assert!(JsonFileProgress::open(&path).unwrap().scores().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let path = temp_path();
        fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonFileProgress::open(&path), Err(ProgressError::Json(_))));
    }
}
