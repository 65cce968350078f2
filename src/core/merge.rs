//! Keyed dedupe-merge of chart lists.
//!
//! Records are folded into an insertion-ordered map keyed by `id`. A later
//! record replaces the value of an existing key without moving it, so base
//! positions survive overrides and override-only keys land at the end.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::debug;

use crate::core::primitives::format_generated_at;
use crate::core::types::{ChartCollection, ChartRecord};

pub const OVERRIDE_ONLY_DESCRIPTION: &str = "Custom dataset only";

/// Counters describing one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub base_len: usize,
    pub override_len: usize,
    pub merged_len: usize,
    /// Records dropped because their id was empty.
    pub skipped_unkeyed: usize,
    /// Inserts that hit an existing key, including duplicates inside one input.
    pub replaced: usize,
}

/// Merges `overrides` over `base`; see the module docs for ordering.
#[must_use]
pub fn merge_charts(base: Vec<ChartRecord>, overrides: Vec<ChartRecord>) -> Vec<ChartRecord> {
    merge_charts_with_stats(base, overrides).0
}

pub fn merge_charts_with_stats(
    base: Vec<ChartRecord>,
    overrides: Vec<ChartRecord>,
) -> (Vec<ChartRecord>, MergeStats) {
    let mut stats = MergeStats {
        base_len: base.len(),
        override_len: overrides.len(),
        ..MergeStats::default()
    };

    let mut by_id: IndexMap<String, ChartRecord> =
        IndexMap::with_capacity(base.len() + overrides.len());
    for record in base.into_iter().chain(overrides) {
        if !record.is_keyed() {
            stats.skipped_unkeyed += 1;
            continue;
        }
        if by_id.insert(record.id.clone(), record).is_some() {
            stats.replaced += 1;
        }
    }

    let merged: Vec<ChartRecord> = by_id.into_values().collect();
    stats.merged_len = merged.len();
    (merged, stats)
}

/// Drops unkeyed records and collapses duplicate ids (last wins, first position kept).
#[must_use]
pub fn dedupe_charts(records: Vec<ChartRecord>) -> Vec<ChartRecord> {
    merge_charts(records, Vec::new())
}

/// Applies `overrides` to an optional base collection.
///
/// With a base, only `charts` changes. Without one, a fresh collection is
/// built from the overrides, stamped with `now` and `override_only_description`.
/// The overrides go through the same filter in both cases: unkeyed records are
/// dropped and repeated ids collapse, so the fresh collection may hold fewer
/// charts than `overrides`.
pub fn merge_into_collection(
    base: Option<ChartCollection>,
    overrides: Vec<ChartRecord>,
    now: DateTime<Utc>,
    override_only_description: &str,
) -> (ChartCollection, MergeStats) {
    match base {
        Some(mut collection) => {
            let base_charts = std::mem::take(&mut collection.charts);
            let (charts, stats) = merge_charts_with_stats(base_charts, overrides);
            debug!(
                base_len = stats.base_len,
                override_len = stats.override_len,
                merged_len = stats.merged_len,
                replaced = stats.replaced,
                "merged override charts into base collection"
            );
            collection.charts = charts;
            (collection, stats)
        }
        None => {
            let (charts, stats) = merge_charts_with_stats(Vec::new(), overrides);
            debug!(
                override_len = stats.override_len,
                merged_len = stats.merged_len,
                "no base collection, publishing overrides only"
            );
            let collection =
                ChartCollection::new(format_generated_at(now), override_only_description, charts);
            (collection, stats)
        }
    }
}
