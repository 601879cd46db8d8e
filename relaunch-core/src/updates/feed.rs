//! Update feed - the published view of cached updates
//!
//! The feed owns an update source and the last view it published. A refresh
//! pulls the full record set, reconciles it, and replaces the previous view
//! in one step. A failed refresh never leaves a stale list in place: the
//! view resets to empty and the error message is kept for display.

use std::time::SystemTime;

use tracing::{debug, warn};

use super::config::FeedConfig;
use super::reconcile::reconcile;
use super::source::UpdateSource;
use super::types::UpdateRecord;

/// Result of a refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshStatus {
    /// The view was replaced with a freshly reconciled record list.
    Refreshed {
        /// Number of records in the published view.
        count: usize,
    },
    /// Retrieval failed; the view was reset to empty.
    Failed(String),
    /// The minimum refresh interval has not elapsed. The source was not
    /// queried and the view is unchanged.
    Skipped,
}

/// Published view of the host's cached updates.
///
/// Exactly one refresh runs at a time per feed: `refresh` takes `&mut self`,
/// so the exclusive borrow is the in-flight guard.
pub struct UpdateFeed<S: UpdateSource> {
    source: S,
    config: FeedConfig,
    records: Vec<UpdateRecord>,
    last_error: Option<String>,
    last_refresh: Option<SystemTime>,
}

impl<S: UpdateSource> UpdateFeed<S> {
    /// Creates a feed over the given source with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, FeedConfig::default())
    }

    /// Creates a feed with the given configuration.
    pub fn with_config(source: S, config: FeedConfig) -> Self {
        UpdateFeed {
            source,
            config,
            records: Vec::new(),
            last_error: None,
            last_refresh: None,
        }
    }

    /// Refreshes the published view from the source.
    ///
    /// On success the previous view is replaced with the reconciled record
    /// list and any earlier error is cleared. On retrieval failure the view
    /// resets to empty and the error message is retained; the refresh time
    /// is not advanced, so the next call retries immediately.
    pub fn refresh(&mut self) -> RefreshStatus {
        if !self.should_refresh_now() {
            return RefreshStatus::Skipped;
        }

        match self.source.list_updates() {
            Ok(raw) => {
                let fetched = raw.len();
                let mut records = reconcile(raw);
                if let Some(max) = self.config.max_records {
                    records.truncate(max);
                }
                debug!(fetched, published = records.len(), "update feed refreshed");

                let count = records.len();
                self.records = records;
                self.last_error = None;
                self.last_refresh = Some(SystemTime::now());
                RefreshStatus::Refreshed { count }
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "update retrieval failed");

                self.records.clear();
                self.last_error = Some(message.clone());
                RefreshStatus::Failed(message)
            }
        }
    }

    /// Returns true if a `refresh` call would query the source now.
    pub fn should_refresh_now(&self) -> bool {
        let Some(last_refresh) = self.last_refresh else {
            // Never refreshed successfully
            return true;
        };

        let elapsed = SystemTime::now()
            .duration_since(last_refresh)
            .unwrap_or_default();

        elapsed >= self.config.min_refresh_interval
    }

    /// The published view: one record per update id, most recent first.
    pub fn records(&self) -> &[UpdateRecord] {
        &self.records
    }

    /// Message of the last failed refresh, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of records in the published view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the published view is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The feed configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Returns a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
