use glance_records::{RecordSet, classify, project_name};

/// One completed project, newest first. `amount` stays in raw units;
/// display formatting is the renderer's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    pub amount: f64,
    pub created_at: String,
    pub path: String,
}

/// XP-earning history: every `"xp"` transaction whose path is not a
/// checkpoint, ordered newest first by the raw `created_at` timestamp
/// (RFC3339 strings compare correctly as text).
pub fn compute_project_history(records: &RecordSet) -> Vec<ProjectEntry> {
    let mut entries: Vec<ProjectEntry> = records
        .transaction
        .iter()
        .filter(|t| t.kind == "xp" && !classify(&t.path).checkpoint)
        .map(|t| ProjectEntry {
            name: project_name(&t.path).to_string(),
            amount: t.amount,
            created_at: t.created_at.clone(),
            path: t.path.clone(),
        })
        .collect();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries
}

/// The viewer's own standing: level from their first enrollment row and
/// total XP summed over their own transactions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerSummary {
    pub level: i64,
    pub total_xp: f64,
}

pub fn viewer_summary(records: &RecordSet) -> ViewerSummary {
    let Some(user) = records.current_user() else {
        return ViewerSummary::default();
    };
    let level = records
        .event_user
        .iter()
        .find(|eu| eu.user_login == user.login)
        .map(|eu| eu.level)
        .unwrap_or(0);
    let total_xp = records
        .transaction
        .iter()
        .filter(|t| t.kind == "xp" && t.user_login == user.login)
        .map(|t| t.amount)
        .sum();
    ViewerSummary { level, total_xp }
}
