use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Coerce a JSON value to `f64`, treating anything non-numeric as `0.0`.
/// Upstream exports occasionally carry nulls or strings in amount fields;
/// a bad cell must not abort the whole snapshot.
fn number_or_zero<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// One ledger entry. `kind` distinguishes `"xp"` transfers from `"audit"`
/// transfers; `path` encodes the project/context slug.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(deserialize_with = "number_or_zero")]
    pub amount: f64,
    pub created_at: String,
    pub user_login: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    pub event_id: i64,
}

/// Audit rows ride along in the snapshot shape; the aggregations here do
/// not consume them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Audit {
    pub auditor_login: String,
    pub audited_at: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub grade: f64,
    pub attrs: serde_json::Value,
}

/// One row per (user, cohort-event) membership.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventUser {
    pub user_login: String,
    pub event_id: i64,
    pub level: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct XpView {
    #[serde(deserialize_with = "number_or_zero")]
    pub amount: f64,
    pub origin_event_id: i64,
    pub path: String,
    pub user_id: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub total_up: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub total_down: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub audit_ratio: f64,
    pub attrs: serde_json::Value,
}

/// The full snapshot for one user's view, as handed over by the fetch
/// layer. Field names match the external JSON shape exactly; every
/// collection defaults to empty and unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecordSet {
    pub user: Vec<User>,
    pub transaction: Vec<Transaction>,
    pub audit: Vec<Audit>,
    pub event_user: Vec<EventUser>,
    pub xp_view: Vec<XpView>,
}

impl RecordSet {
    pub fn from_json_str(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The current user is the first (usually only) row of the `user`
    /// collection.
    #[inline]
    pub fn current_user(&self) -> Option<&User> {
        self.user.first()
    }
}
