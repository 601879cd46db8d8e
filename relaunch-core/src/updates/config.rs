//! Configuration for the update feed

use std::time::Duration;

/// Configuration for an update feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Minimum interval between refreshes that actually query the source.
    /// Zero means every `refresh` call goes through.
    pub min_refresh_interval: Duration,

    /// Maximum number of records the feed publishes, most recent first.
    /// `None` publishes the full reconciled set.
    pub max_records: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            min_refresh_interval: Duration::ZERO,
            max_records: None,
        }
    }
}

impl FeedConfig {
    /// Sets a minimum interval between refreshes that query the source.
    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    /// Caps the published view at the given number of records.
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }
}
