use serde::Deserialize;

/// Knobs for the XP histogram. The primary event id selects which cohort
/// seeds the user universe; the bucket width is in the same units as
/// transaction amounts.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    pub primary_event_id: i64,
    pub xp_bucket_width: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            primary_event_id: 72,
            xp_bucket_width: 5000.0,
        }
    }
}
