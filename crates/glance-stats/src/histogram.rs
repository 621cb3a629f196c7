use std::collections::BTreeMap;

use hashbrown::HashMap;

use glance_records::RecordSet;

use crate::bucket::bucketize;
use crate::config::StatsConfig;

/// One non-empty histogram bucket: the bucket's lower bound and how many
/// users fell into it. Sequences are always sorted ascending by `bucket`
/// and never contain a zero count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistogramPoint {
    pub bucket: i64,
    pub user_count: u32,
}

/// Distribution of accumulated XP across the primary cohort.
///
/// Enrollment in `cfg.primary_event_id` defines the user universe; every
/// `"xp"` transaction for a seeded login adds to that user's total
/// (transactions for unknown logins are ignored). Users whose total is not
/// strictly positive are dropped, and the rest are bucketed by
/// `cfg.xp_bucket_width`.
pub fn compute_xp_histogram(records: &RecordSet, cfg: &StatsConfig) -> Vec<HistogramPoint> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for eu in &records.event_user {
        if eu.event_id == cfg.primary_event_id {
            totals.entry(eu.user_login.as_str()).or_insert(0.0);
        }
    }

    for t in &records.transaction {
        if t.kind != "xp" {
            continue;
        }
        if let Some(total) = totals.get_mut(t.user_login.as_str()) {
            *total += t.amount;
        }
    }

    let positive: Vec<f64> = totals.into_values().filter(|xp| *xp > 0.0).collect();
    bucketize(&positive, cfg.xp_bucket_width)
        .into_iter()
        .map(|(bucket, user_count)| HistogramPoint { bucket, user_count })
        .collect()
}

/// Distribution of enrollment levels. Every event-user row contributes its
/// level (rows are not deduplicated by login, so a user enrolled in several
/// cohorts counts once per cohort).
pub fn compute_level_histogram(records: &RecordSet) -> Vec<HistogramPoint> {
    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for eu in &records.event_user {
        *counts.entry(eu.level).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(bucket, user_count)| HistogramPoint { bucket, user_count })
        .collect()
}
