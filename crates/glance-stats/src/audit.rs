use glance_records::{RecordSet, classify};

/// Audit totals for the current user.
///
/// `done`/`received` come straight off the user row (`total_up`/`total_down`,
/// byte counts); `done_xp`/`received_xp` are summed independently from the
/// audit transactions by path direction. The two pairs come from different
/// sources upstream and are not required to agree; both are reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuditStats {
    pub done: f64,
    pub received: f64,
    pub done_xp: f64,
    pub received_xp: f64,
    pub ratio: f64,
}

impl Default for AuditStats {
    fn default() -> Self {
        Self {
            done: 0.0,
            received: 0.0,
            done_xp: 0.0,
            received_xp: 0.0,
            ratio: 1.0,
        }
    }
}

/// Derive [`AuditStats`] from one snapshot. No user row yields the default
/// stats (ratio 1); a zero or non-finite stored ratio also falls back to 1.
pub fn compute_audit_stats(records: &RecordSet) -> AuditStats {
    let Some(user) = records.current_user() else {
        return AuditStats::default();
    };

    let ratio = if user.audit_ratio.is_finite() && user.audit_ratio != 0.0 {
        user.audit_ratio
    } else {
        1.0
    };

    let mut done_xp = 0.0;
    let mut received_xp = 0.0;
    for t in &records.transaction {
        if t.kind != "audit" {
            continue;
        }
        let class = classify(&t.path);
        if class.up {
            done_xp += t.amount;
        }
        if class.down {
            received_xp += t.amount;
        }
    }

    AuditStats {
        done: user.total_up,
        received: user.total_down,
        done_xp,
        received_xp,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_user_row_yields_defaults() {
        let stats = compute_audit_stats(&RecordSet::default());
        assert_eq!(stats, AuditStats::default());
        assert_eq!(stats.ratio, 1.0);
    }

    #[test]
    fn user_totals_and_path_sums_are_independent() {
        let rs = RecordSet::from_json_str(
            r#"{
                "user": [{"login": "alice", "totalUp": 2000000,
                          "totalDown": 1000000, "auditRatio": 2.0}],
                "transaction": [
                    {"amount": 700, "type": "audit", "path": "/div/foo/up"},
                    {"amount": 300, "type": "audit", "path": "/div/bar/down"},
                    {"amount": 999, "type": "xp", "path": "/div/foo/up"}
                ]
            }"#,
        )
        .unwrap();
        let stats = compute_audit_stats(&rs);
        assert_eq!(stats.done, 2_000_000.0);
        assert_eq!(stats.received, 1_000_000.0);
        assert_eq!(stats.done_xp, 700.0);
        assert_eq!(stats.received_xp, 300.0);
        assert_eq!(stats.ratio, 2.0);
    }

    #[test]
    fn zero_ratio_falls_back_to_one() {
        let rs = RecordSet::from_json_str(
            r#"{"user": [{"login": "a", "auditRatio": 0}]}"#,
        )
        .unwrap();
        assert_eq!(compute_audit_stats(&rs).ratio, 1.0);
    }
}
