// SPDX-FileCopyrightText: 2026 Relaunch Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cached update history module
//!
//! Provides the reconciled view of previously downloaded app updates:
//! - `reconcile` collapses duplicate records to the most recent per id
//! - `UpdateSource` is the seam to the host's update store
//! - `UpdateFeed` holds the last published view and its refresh lifecycle
//!
//! The backing store may report the same update several times (one row per
//! download attempt), in no particular order. Consumers always see one
//! record per update id, ordered by recency.

mod config;
mod feed;
mod reconcile;
mod source;
mod types;

pub use config::FeedConfig;
pub use feed::{RefreshStatus, UpdateFeed};
pub use reconcile::reconcile;
pub use source::{MockUpdateSource, RetrievalError, UpdateSource};
pub use types::UpdateRecord;
