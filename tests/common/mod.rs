#![allow(dead_code)]

use std::path::Path;

use quiz_assignments::AssignmentStore;

pub const A1: &str = r#"{
    "id": "a1",
    "title": "First",
    "questions": [
        {"id": 1, "text": "Q1", "options": ["A", "B"], "correctAnswer": "A"},
        {"id": 2, "text": "Q2", "options": ["C", "D"], "correctAnswer": "D"}
    ]
}"#;

pub const EMPTY: &str = r#"{"id": "empty", "title": "No questions", "questions": []}"#;

/// A fresh, empty assignments directory.
pub fn create_test_store() -> AssignmentStore {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("quiz_assignments_test_{}_{}", std::process::id(), id));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create test directory");
    AssignmentStore::new(dir)
}

/// A store holding `a1` and `empty`.
pub fn create_seeded_store() -> AssignmentStore {
    let store = create_test_store();
    write_assignment(store.dir(), "a1", A1);
    write_assignment(store.dir(), "empty", EMPTY);
    store
}

pub fn write_assignment(dir: &Path, id: &str, content: &str) {
    std::fs::write(dir.join(format!("{}.json", id)), content).expect("failed to write assignment");
}
