use std::collections::{BTreeMap, HashSet};

use glance_records::{EventUser, RecordSet, Transaction};
use glance_stats::{
    StatsConfig, bucketize, compute_audit_stats, compute_level_histogram, compute_xp_histogram,
};
use proptest::prelude::*;

const PRIMARY_EVENT: i64 = 72;
const OTHER_EVENT: i64 = 20;

fn arb_login() -> impl Strategy<Value = String> {
    "[a-f]{1,4}"
}

fn arb_event_users() -> impl Strategy<Value = Vec<EventUser>> {
    prop::collection::vec(
        (arb_login(), prop_oneof![Just(PRIMARY_EVENT), Just(OTHER_EVENT)], 0i64..12),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(user_login, event_id, level)| EventUser {
                user_login,
                event_id,
                level,
            })
            .collect()
    })
}

fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (
            arb_login(),
            prop_oneof![Just("xp".to_string()), Just("audit".to_string())],
            -10_000.0f64..100_000.0,
        ),
        0..48,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(user_login, kind, amount)| Transaction {
                user_login,
                kind,
                amount,
                ..Transaction::default()
            })
            .collect()
    })
}

fn arb_record_set() -> impl Strategy<Value = RecordSet> {
    (arb_event_users(), arb_transactions()).prop_map(|(event_user, transaction)| RecordSet {
        event_user,
        transaction,
        ..RecordSet::default()
    })
}

/// Oracle: accumulate XP per seeded login the slow, obvious way.
fn expected_positive_totals(rs: &RecordSet) -> Vec<f64> {
    let seeded: HashSet<&str> = rs
        .event_user
        .iter()
        .filter(|eu| eu.event_id == PRIMARY_EVENT)
        .map(|eu| eu.user_login.as_str())
        .collect();
    let mut totals: BTreeMap<&str, f64> = seeded.iter().map(|login| (*login, 0.0)).collect();
    for t in &rs.transaction {
        if t.kind == "xp" {
            if let Some(total) = totals.get_mut(t.user_login.as_str()) {
                *total += t.amount;
            }
        }
    }
    totals.into_values().filter(|xp| *xp > 0.0).collect()
}

proptest! {
    // Every input lands in exactly one bucket: counts partition the input.
    #[test]
    fn bucketize_partitions_input(
        values in prop::collection::vec(-1e6f64..1e6, 0..64),
        width in 1u32..20_000,
    ) {
        let width = width as f64;
        let buckets = bucketize(&values, width);
        let total: u64 = buckets.values().map(|c| *c as u64).sum();
        prop_assert_eq!(total, values.len() as u64);
        prop_assert!(buckets.values().all(|c| *c > 0));
    }

    // Keys are floor-multiples of the width and each value maps to a key
    // that is actually present.
    #[test]
    fn bucketize_keys_are_floor_multiples(
        values in prop::collection::vec(0f64..1e6, 1..64),
        width in 1u32..20_000,
    ) {
        let w = width as f64;
        let buckets = bucketize(&values, w);
        for key in buckets.keys() {
            prop_assert_eq!(key.rem_euclid(width as i64), 0);
        }
        for v in &values {
            let key = ((v / w).floor() * w) as i64;
            prop_assert!(buckets.contains_key(&key));
        }
    }

    // Input slice is observationally unchanged (pure function).
    #[test]
    fn bucketize_does_not_mutate_input(
        values in prop::collection::vec(-1e6f64..1e6, 0..64),
        width in 1u32..20_000,
    ) {
        let before = values.clone();
        let _ = bucketize(&values, width as f64);
        prop_assert_eq!(values, before);
    }

    // Sum of user counts equals the number of distinct seeded users with
    // strictly positive accumulated XP; keys ascend strictly and are
    // non-negative multiples of the bucket width.
    #[test]
    fn xp_histogram_counts_positive_seeded_users(rs in arb_record_set()) {
        let cfg = StatsConfig::default();
        let hist = compute_xp_histogram(&rs, &cfg);
        let expected = expected_positive_totals(&rs);

        let total: u64 = hist.iter().map(|p| p.user_count as u64).sum();
        prop_assert_eq!(total, expected.len() as u64);

        let width = cfg.xp_bucket_width as i64;
        for pair in hist.windows(2) {
            prop_assert!(pair[0].bucket < pair[1].bucket);
        }
        for p in &hist {
            prop_assert!(p.user_count >= 1);
            prop_assert!(p.bucket >= 0);
            prop_assert_eq!(p.bucket.rem_euclid(width), 0);
        }
    }

    // Level histogram counts every enrollment row exactly once.
    #[test]
    fn level_histogram_counts_every_row(rs in arb_record_set()) {
        let hist = compute_level_histogram(&rs);
        let total: u64 = hist.iter().map(|p| p.user_count as u64).sum();
        prop_assert_eq!(total, rs.event_user.len() as u64);
        for pair in hist.windows(2) {
            prop_assert!(pair[0].bucket < pair[1].bucket);
        }
    }

    // No hidden state: recomputation over the same snapshot is identical.
    #[test]
    fn aggregations_are_idempotent(rs in arb_record_set()) {
        let cfg = StatsConfig::default();
        prop_assert_eq!(compute_xp_histogram(&rs, &cfg), compute_xp_histogram(&rs, &cfg));
        prop_assert_eq!(compute_level_histogram(&rs), compute_level_histogram(&rs));
        prop_assert_eq!(compute_audit_stats(&rs), compute_audit_stats(&rs));
    }
}
