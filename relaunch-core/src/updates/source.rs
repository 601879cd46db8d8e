//! Retrieval seam to the host's update store
//!
//! The host application owns the actual store of downloaded updates (a
//! database, launcher internals behind a bridge). This module defines the
//! seam the feed pulls records through, plus an in-memory double for tests.

use std::io;

use thiserror::Error;

use super::types::UpdateRecord;

/// Bulk retrieval of cached update records.
///
/// Implementations return the full known set of records on every call.
pub trait UpdateSource {
    /// Returns every cached update record known to the store.
    ///
    /// This is a blocking call; scheduling and cancellation belong to the
    /// embedding host. No ordering or uniqueness guarantees on the result;
    /// the feed reconciles it before publishing.
    fn list_updates(&mut self) -> Result<Vec<UpdateRecord>, RetrievalError>;
}

/// Errors reported by an update source.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The backing store reported a failure.
    #[error("Store error: {0}")]
    Backend(String),

    /// IO error from a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Record deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory update source for tests.
///
/// Serves a configured record set and can be scripted to fail the next call.
#[derive(Debug, Default)]
pub struct MockUpdateSource {
    records: Vec<UpdateRecord>,
    fail_next: Option<String>,
    list_calls: usize,
}

impl MockUpdateSource {
    /// Creates an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock source preloaded with records.
    pub fn with_records(records: Vec<UpdateRecord>) -> Self {
        MockUpdateSource {
            records,
            ..Self::default()
        }
    }

    /// Replaces the record set served by subsequent calls.
    pub fn set_records(&mut self, records: Vec<UpdateRecord>) {
        self.records = records;
    }

    /// Makes the next `list_updates` call fail with the given message.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    /// Number of `list_updates` calls served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls
    }
}

impl UpdateSource for MockUpdateSource {
    fn list_updates(&mut self) -> Result<Vec<UpdateRecord>, RetrievalError> {
        self.list_calls += 1;

        if let Some(message) = self.fail_next.take() {
            return Err(RetrievalError::Backend(message));
        }

        Ok(self.records.clone())
    }
}
