// SPDX-FileCopyrightText: 2026 Relaunch Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Update reconciliation
//!
//! Collapses the raw, possibly duplicated output of the update store into
//! one record per update id, most recent first.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::types::UpdateRecord;

/// Collapses duplicate update records and orders the survivors by recency.
///
/// For every distinct `id` in the input, the output contains exactly one
/// record: the one with the highest `timestamp` among all input records
/// sharing that `id`. Replacement requires a strictly higher timestamp, so
/// among same-id records with equal timestamps the first one encountered is
/// retained.
///
/// The output is sorted by `timestamp` descending. Distinct ids with equal
/// timestamps are ordered by the first occurrence of each id in the input,
/// so the result is deterministic for a given input order.
///
/// Runs in O(n log n), dominated by the final sort.
pub fn reconcile<I>(records: I) -> Vec<UpdateRecord>
where
    I: IntoIterator<Item = UpdateRecord>,
{
    // Per id: rank of its first occurrence, plus the best record seen so far.
    let mut best: HashMap<String, (usize, UpdateRecord)> = HashMap::new();
    let mut next_rank = 0;

    for record in records {
        match best.entry(record.id.clone()) {
            Entry::Occupied(mut slot) => {
                let (_, kept) = slot.get_mut();
                if record.timestamp > kept.timestamp {
                    *kept = record;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((next_rank, record));
                next_rank += 1;
            }
        }
    }

    let mut survivors: Vec<(usize, UpdateRecord)> = best.into_values().collect();
    survivors.sort_by(|(rank_a, a), (rank_b, b)| {
        b.timestamp.cmp(&a.timestamp).then(rank_a.cmp(rank_b))
    });

    survivors.into_iter().map(|(_, record)| record).collect()
}
