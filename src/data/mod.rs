//! Filesystem-backed assignment storage.

mod store;

pub use store::AssignmentStore;
