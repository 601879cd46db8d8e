// SPDX-FileCopyrightText: 2026 Relaunch Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record type for cached app updates

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One cached update record as reported by the host's update store.
///
/// Records arrive in no particular order, and the same `id` may appear more
/// than once (one row per download attempt). Everything beyond `id` and
/// `timestamp` is opaque to this crate and passes through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Update identifier. Not guaranteed unique in store output.
    pub id: String,
    /// Download time in epoch milliseconds; higher is more recent.
    /// Zero and negative values are valid and compare numerically.
    pub timestamp: i64,
    /// Remaining wire fields (name, manifest, ...), passed through unchanged.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl UpdateRecord {
    /// Creates a record with an empty payload.
    pub fn new(id: impl Into<String>, timestamp: i64) -> Self {
        UpdateRecord {
            id: id.into(),
            timestamp,
            payload: Map::new(),
        }
    }
}
