//! Storage collaborator error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Each variant carries the underlying collaborator message verbatim. There
//! is no retry policy: every failure is surfaced once through the
//! notification queue and the operation is left for the user to re-trigger.
//! No error is fatal to browser state; worst case is a stale snapshot.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures reported by the storage collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A collection fetch failed; the previous snapshot stays intact.
    #[error("Error fetching {collection}: {message}")]
    Fetch {
        collection: &'static str,
        message: String,
    },
    /// A delete failed; the pending confirmation stays open for retry.
    #[error("Error deleting {collection} record: {message}")]
    Delete {
        collection: &'static str,
        message: String,
    },
    /// A create/update failed; the authoring form stays open.
    #[error("Error saving {collection} record: {message}")]
    Save {
        collection: &'static str,
        message: String,
    },
}
